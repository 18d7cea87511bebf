use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hotel_search::hotel::map_hotels;
use hotel_search::provider::{ProviderFacility, ProviderHotel};
use hotel_search::results::{ResultsPage, SortOrder};
use hotel_search::SearchCriteria;

const FACILITIES: [&str; 8] = [
    "WiFi",
    "Parking",
    "Sauna",
    "fitness",
    "Room_Service",
    "casino",
    "air_conditioning",
    "Breakfast",
];

fn provider_hotels(count: u64) -> Vec<ProviderHotel> {
    (0..count)
        .map(|i| ProviderHotel {
            hotel_id: i,
            hotel_name: format!("Hotel {}", i),
            address: Some(format!("{} Main Street", i)),
            review_score: (i % 3 != 0).then(|| (i % 50) as f64 / 10.0),
            min_total_price: Some(50.0 + (i * 37 % 400) as f64),
            facilities: FACILITIES
                .iter()
                .take((i % 8) as usize + 1)
                .map(|name| ProviderFacility {
                    facility_name: name.to_string(),
                })
                .collect(),
            ..Default::default()
        })
        .collect()
}

// Record mapping plus page shaping, the per-request CPU work on the search path
pub fn mapping_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("hotel_result_mapping");
    let criteria = SearchCriteria {
        location: "Paris".to_string(),
        check_in: "2024-06-01".to_string(),
        check_out: "2024-06-03".to_string(),
        ..Default::default()
    };

    for count in [20u64, 100, 500].iter() {
        let hotels = provider_hotels(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &hotels, |b, hotels| {
            b.iter(|| {
                let summaries = map_hotels(hotels.clone());
                black_box(ResultsPage::build(&criteria, summaries, SortOrder::PriceLow))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, mapping_benchmark);
criterion_main!(benches);
