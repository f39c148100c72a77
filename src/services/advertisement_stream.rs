use crate::domain::advertisement::Advertisement;
use crate::domain::parameters::StreamPolicy;
use crate::services::random_process::AdSampler;

/// Generates the advertisement requests of one day in arrival order.
pub fn generate_advertisements<S: AdSampler + ?Sized>(
    sampler: &mut S,
    policy: StreamPolicy,
    available_minutes: f64,
) -> Vec<Advertisement> {
    match policy {
        StreamPolicy::Budget => generate_within_budget(sampler, available_minutes),
        StreamPolicy::Count(count) => generate_count(sampler, count),
    }
}

/// Keeps drawing until the next candidate would end after `available_minutes`.
/// That candidate is dropped.
pub fn generate_within_budget<S: AdSampler + ?Sized>(
    sampler: &mut S,
    available_minutes: f64,
) -> Vec<Advertisement> {
    let mut ads = Vec::new();
    let mut current_time = 0.0_f64;

    loop {
        let interarrival = sampler.next_interarrival();
        let duration = sampler.next_duration();
        let arrival_time = current_time + interarrival;

        if arrival_time + duration > available_minutes {
            break;
        }

        ads.push(Advertisement::new(ads.len(), arrival_time, duration));
        current_time = arrival_time;
    }

    ads
}

/// Draws exactly `count` requests; the first arrives at minute zero and each
/// later one after the cumulative sum of the preceding gaps.
pub fn generate_count<S: AdSampler + ?Sized>(sampler: &mut S, count: usize) -> Vec<Advertisement> {
    let gaps: Vec<f64> = (0..count).map(|_| sampler.next_interarrival()).collect();
    let durations: Vec<f64> = (0..count).map(|_| sampler.next_duration()).collect();

    let mut arrival_time = 0.0_f64;
    gaps.iter()
        .zip(durations)
        .enumerate()
        .map(|(index, (gap, duration))| {
            let ad = Advertisement::new(index, arrival_time, duration);
            arrival_time += gap;
            ad
        })
        .collect()
}
