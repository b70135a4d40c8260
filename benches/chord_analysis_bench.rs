//! Benchmarks for chord matching and the full progression pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chord_dsp::{
    analyze_chroma, match_chord, AnalysisConfig, ChordTemplates, MatchStrategy,
};

fn synthetic_progression(frames_per_chord: usize) -> Vec<Vec<f32>> {
    let chords: [&[usize]; 4] = [&[0, 4, 7], &[9, 0, 4], &[2, 5, 9], &[7, 11, 2, 5]];
    let mut chroma = Vec::with_capacity(frames_per_chord * chords.len());
    for active in chords {
        let mut frame = vec![0.05f32; 12];
        for &i in active {
            frame[i] = 1.0;
        }
        chroma.extend(std::iter::repeat(frame).take(frames_per_chord));
    }
    chroma
}

fn bench_match_chord(c: &mut Criterion) {
    let templates = ChordTemplates::new();
    let chroma = [1.0, 0.0, 0.1, 0.0, 0.9, 0.05, 0.0, 0.85, 0.0, 0.1, 0.0, 0.05];

    c.bench_function("match_chord_weighted", |b| {
        b.iter(|| {
            match_chord(
                black_box(&chroma),
                &templates,
                MatchStrategy::WeightedMultiMetric,
                0.3,
            )
        })
    });

    c.bench_function("match_chord_correlation", |b| {
        b.iter(|| {
            match_chord(
                black_box(&chroma),
                &templates,
                MatchStrategy::CorrelationOnly,
                0.3,
            )
        })
    });
}

fn bench_analyze_chroma(c: &mut Criterion) {
    let config = AnalysisConfig::default();

    // ~1s per chord at default frame geometry
    let short = synthetic_progression(43);
    c.bench_function("analyze_chroma_4_chords", |b| {
        b.iter(|| analyze_chroma(black_box(&short), &config))
    });

    // ~30s of audio
    let long = synthetic_progression(320);
    c.bench_function("analyze_chroma_30s", |b| {
        b.iter(|| analyze_chroma(black_box(&long), &config))
    });
}

criterion_group!(benches, bench_match_chord, bench_analyze_chroma);
criterion_main!(benches);
