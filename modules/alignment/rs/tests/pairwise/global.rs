use eyre::Result;

use dpalign_alignment_rs::pairwise::{global, global_score, ScoreConfig};
use dpalign_alignment_rs::Alignable;

use super::{rows, Score};

struct Workload<'a> {
    reference: &'a str,
    query: &'a str,
    config: ScoreConfig<Score>,
    score: Score,
}

fn ensure(w: Workload<'_>) -> Result<()> {
    for (seq1, seq2) in [(w.reference, w.query), (w.query, w.reference)] {
        let matrix = global(seq1, seq2, &w.config)?;
        assert_eq!(matrix.shape(), (seq1.len() + 1, seq2.len() + 1));
        assert_eq!(matrix.last(), w.score, "{seq1} vs {seq2} with {}", w.config);
        assert_eq!(global_score(seq1, seq2, &w.config)?, w.score);
    }
    Ok(())
}

#[test]
fn test_scores() -> Result<()> {
    let workload = vec![
        Workload {
            reference: "GATTACA",
            query: "GCATGCU",
            config: ScoreConfig::default(),
            score: -1,
        },
        Workload {
            reference: "ACGT",
            query: "TGCA",
            config: ScoreConfig::default(),
            score: -4,
        },
        Workload {
            reference: "GGTTGACTA",
            query: "TGTTACGG",
            config: ScoreConfig::new(3, -3, -2),
            score: 4,
        },
        Workload {
            reference: "AAAA",
            query: "",
            config: ScoreConfig::default(),
            score: -8,
        },
        Workload {
            reference: "ACGTACGT",
            query: "ACGT",
            config: ScoreConfig::default().with_gap(-1),
            score: 0,
        },
    ];
    for w in workload {
        ensure(w)?;
    }
    Ok(())
}

#[test]
fn test_gattaca_matrix() -> Result<()> {
    let matrix = global("GATTACA", "GCATGCU", &ScoreConfig::default())?;
    assert_eq!(
        rows(&matrix),
        vec![
            vec![0, -2, -4, -6, -8, -10, -12, -14],
            vec![-2, 1, -1, -3, -5, -7, -9, -11],
            vec![-4, -1, 0, 0, -2, -4, -6, -8],
            vec![-6, -3, -2, -1, 1, -1, -3, -5],
            vec![-8, -5, -4, -3, 0, 0, -2, -4],
            vec![-10, -7, -6, -3, -2, -1, -1, -3],
            vec![-12, -9, -6, -5, -4, -3, 0, -2],
            vec![-14, -11, -8, -5, -6, -5, -2, -1],
        ]
    );
    Ok(())
}

#[test]
fn test_boundaries() -> Result<()> {
    for gap in [-2, -1, 0, 3] {
        let config = ScoreConfig::default().with_gap(gap);
        let matrix = global("ACGTTA", "GTA", &config)?;
        for (ind, score) in matrix.column(0).enumerate() {
            assert_eq!(score, gap * ind as Score);
        }
        for (ind, score) in matrix.row(0).iter().enumerate() {
            assert_eq!(*score, gap * ind as Score);
        }
    }
    Ok(())
}

#[test]
fn test_self_alignment() -> Result<()> {
    for seq in ["A", "ACGT", "AAAAAAA", "GATTACA", "TTGCAACGTTAGC"] {
        for config in [
            ScoreConfig::default(),
            ScoreConfig::new(2, -3, -5),
            ScoreConfig::new(5, 0, -1),
        ] {
            let matrix = global(seq, seq, &config)?;
            assert_eq!(matrix.last(), config.match_score() * seq.len() as Score);
        }
    }
    Ok(())
}

#[test]
fn test_symmetry() -> Result<()> {
    let workload = [
        ("GATTACA", "GCATGCU"),
        ("ACGTTGCA", "TGC"),
        ("", "ACGT"),
        ("AAAA", "AAAAAAAA"),
    ];
    for config in [ScoreConfig::default(), ScoreConfig::new(3, -1, -4)] {
        for (a, b) in workload {
            assert_eq!(global(a, b, &config)?.transposed(), global(b, a, &config)?);
        }
    }
    Ok(())
}

#[test]
fn test_reversed_sequences_keep_the_score() -> Result<()> {
    let (reference, query) = ("GGTTGACTA", "TGTTACGG");
    let config = ScoreConfig::new(3, -3, -2);
    assert_eq!(
        global_score(&reference.reversed(), &query.reversed(), &config)?,
        global_score(reference, query, &config)?
    );
    Ok(())
}

#[test]
fn test_may_be_negative() -> Result<()> {
    let matrix = global("AAAA", "TTTT", &ScoreConfig::default())?;
    assert!(matrix.as_slice().iter().any(|x| *x < 0));
    assert_eq!(matrix.last(), -4);
    Ok(())
}

#[test]
fn test_empty() -> Result<()> {
    let matrix = global("", "", &ScoreConfig::default())?;
    assert_eq!(matrix.shape(), (1, 1));
    assert_eq!(rows(&matrix), vec![vec![0]]);

    let matrix = global("", "GAT", &ScoreConfig::default())?;
    assert_eq!(rows(&matrix), vec![vec![0, -2, -4, -6]]);
    Ok(())
}

#[test]
fn test_generic_symbols() -> Result<()> {
    let config = ScoreConfig::<i64>::new(10, -5, -7);
    let reference = vec!["chr1", "chr2", "chr3"];
    let query = vec!["chr1", "chr3"];
    assert_eq!(global_score(&reference, &query, &config)?, 13);

    let reference = [1.0, 2.0, 3.0];
    let query = [1.0, 2.5, 3.0];
    assert_eq!(global_score(&reference, &query, &config)?, 15);
    Ok(())
}

#[test]
fn test_idempotence() -> Result<()> {
    let config = ScoreConfig::new(2, -1, -2);
    let first = global("TTGCAACGTTAGC", "TGCATCGTAGC", &config)?;
    let second = global("TTGCAACGTTAGC", "TGCATCGTAGC", &config)?;
    assert_eq!(first.as_slice(), second.as_slice());
    Ok(())
}
