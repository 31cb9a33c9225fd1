// Criterion benchmarks for PetLife Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use petlife_match::config::PresenterSettings;
use petlife_match::core::{MatchController, MatchQueue, ReviewState, SessionSnapshot};
use petlife_match::models::{Candidate, Decision, Pet, PetId};
use petlife_match::presenter::render;
use petlife_match::services::{MatchService, ServiceError};

fn create_pet(id: usize) -> Pet {
    Pet {
        name: Some(format!("Pet {}", id)),
        sex: Some(if id % 2 == 0 { "Female" } else { "Male" }.to_string()),
        breed: Some("Beagle".to_string()),
        date_of_birth: Some("2020-06-01".to_string()),
        photo: Some(format!("pet_photos/{}.jpg", id)),
        ..Pet::new(PetId::parse(&id.to_string()).unwrap())
    }
}

fn create_candidates(count: usize) -> Vec<Candidate> {
    (0..count).map(|i| Candidate::new(create_pet(i + 1))).collect()
}

/// Backend that answers instantly with a fixed candidate list
struct FixedService {
    candidates: Vec<Candidate>,
}

impl MatchService for FixedService {
    async fn pet_details(&self, pet_id: &PetId) -> Result<Pet, ServiceError> {
        Ok(Pet::new(pet_id.clone()))
    }

    async fn accepted_matches(&self, _pet_id: &PetId) -> Result<Vec<Pet>, ServiceError> {
        Ok(Vec::new())
    }

    async fn potential_matches(&self, _pet_id: &PetId) -> Result<Vec<Candidate>, ServiceError> {
        Ok(self.candidates.clone())
    }

    async fn decide(&self, _pet_id: &PetId, _candidate_id: &PetId, _decision: Decision) -> Result<(), ServiceError> {
        Ok(())
    }
}

fn bench_queue_walk(c: &mut Criterion) {
    let candidates = create_candidates(1000);

    c.bench_function("queue_walk_1000", |b| {
        b.iter(|| {
            let mut queue = MatchQueue::new(black_box(candidates.clone()));
            while queue.current().is_some() {
                queue.advance();
            }
            black_box(queue.cursor())
        });
    });
}

fn bench_render(c: &mut Criterion) {
    let settings = PresenterSettings::default();
    let mut group = c.benchmark_group("render");

    for accepted_count in [0, 10, 100, 500].iter() {
        let snapshot = SessionSnapshot {
            selected: PetId::parse("0"),
            state: ReviewState::Reviewing,
            pet: Some(create_pet(0)),
            current: Some(Candidate::new(create_pet(1))),
            queue_len: 1,
            accepted: (0..*accepted_count).map(create_pet).collect(),
            ..SessionSnapshot::default()
        };

        group.bench_with_input(
            BenchmarkId::new("review_view", accepted_count),
            accepted_count,
            |b, _| {
                b.iter(|| render(black_box(&snapshot), black_box(&settings)));
            },
        );
    }

    group.finish();
}

fn bench_full_review(c: &mut Criterion) {
    c.bench_function("select_and_review_100", |b| {
        b.iter(|| {
            let controller = MatchController::new(FixedService {
                candidates: create_candidates(100),
            });
            tokio_test::block_on(async {
                controller.select_pet("0").await.unwrap();
                while let Some(candidate) = controller.current_candidate().await {
                    controller.accept(candidate.id()).await.unwrap();
                }
            });
            black_box(controller)
        });
    });
}

criterion_group!(benches, bench_queue_walk, bench_render, bench_full_review);

criterion_main!(benches);
