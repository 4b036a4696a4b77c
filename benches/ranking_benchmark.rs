//! Benchmark for ranking state construction and gesture handling
//!
//! Target: a full drag gesture should stay well under a frame (16ms)

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jury_core::model::{ItemId, JudgedProject};
use jury_core::ranking::{
    hit_test, Container, DropTarget, Layout, Point, RankingSession, RankingState, Rect,
};

/// A judge late in the event: many seen projects, full ranking
fn create_profile(seen: usize) -> (Vec<JudgedProject>, Vec<String>) {
    let projects: Vec<JudgedProject> = (0..seen)
        .map(|i| JudgedProject {
            project_id: format!("{:024x}", i),
            name: format!("Project {}", i),
            description: format!("Description for project {}", i),
            stars: (i % 7) as u32,
            starred: i % 5 == 0,
            location: i as u64,
            notes: String::new(),
        })
        .collect();
    let rankings = projects
        .iter()
        .rev()
        .take(5)
        .map(|p| p.project_id.clone())
        .collect();
    (projects, rankings)
}

fn benchmark_state_construction(c: &mut Criterion) {
    let (seen, rankings) = create_profile(200);

    c.bench_function("ranking_state_from_profile", |b| {
        b.iter(|| black_box(RankingState::from_profile(black_box(&seen), black_box(&rankings))))
    });
}

fn benchmark_gestures(c: &mut Criterion) {
    let (seen, rankings) = create_profile(200);
    let state = RankingState::from_profile(&seen, &rankings);
    let top = state.ranked()[0].id;
    let newcomer = state.unranked()[0].id;

    c.bench_function("move_ranked_item_to_unranked", |b| {
        b.iter(|| {
            let mut session = RankingSession::new(state.clone(), false);
            session.begin_drag(top).unwrap();
            session
                .drag_over(top, Some(DropTarget::Container(Container::Unranked)))
                .unwrap();
            session
                .drag_over(top, Some(DropTarget::Item(newcomer)))
                .unwrap();
            black_box(session.end_drag(top, Some(DropTarget::Item(top))).unwrap())
        })
    });

    c.bench_function("rejected_drop_on_full_ranking", |b| {
        b.iter(|| {
            let mut session = RankingSession::new(state.clone(), false);
            session.begin_drag(newcomer).unwrap();
            black_box(
                session
                    .end_drag(newcomer, Some(DropTarget::Container(Container::Ranked)))
                    .unwrap(),
            )
        })
    });
}

fn benchmark_hit_test(c: &mut Criterion) {
    let mut layout = Layout {
        containers: vec![
            (Container::Ranked, Rect::new(0.0, 0.0, 400.0, 300.0)),
            (Container::Unranked, Rect::new(0.0, 320.0, 400.0, 200.0 * 60.0)),
        ],
        items: Vec::new(),
    };
    for i in 0..200u32 {
        let (container, y) = if i < 5 {
            (Container::Ranked, i as f64 * 60.0)
        } else {
            (Container::Unranked, 320.0 + (i - 5) as f64 * 60.0)
        };
        layout
            .items
            .push((ItemId(i + 1), container, Rect::new(0.0, y, 400.0, 56.0)));
    }

    c.bench_function("hit_test_closest_item", |b| {
        b.iter(|| black_box(hit_test(&layout, black_box(Point::new(200.0, 5000.0)))))
    });
}

criterion_group!(benches, benchmark_state_construction, benchmark_gestures, benchmark_hit_test);
criterion_main!(benches);
