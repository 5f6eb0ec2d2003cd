//! Tabular output for `sample`: one row per drawn surface.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;
use surfclass::classify::classify;
use surfclass::sample::{draw_word, ReplayToken, SampleCfg};
use surfclass::word::format_word;
use surfclass::Surface;

/// Draw `count` surfaces from `seed` and classify each.
pub fn sample_frame(cfg: SampleCfg, seed: u64, count: u64) -> Result<DataFrame> {
    let n = count as usize;
    let mut index = Vec::with_capacity(n);
    let mut words = Vec::with_capacity(n);
    let mut vertices = Vec::with_capacity(n);
    let mut orientable = Vec::with_capacity(n);
    let mut genus = Vec::with_capacity(n);
    let mut chi = Vec::with_capacity(n);
    let mut names = Vec::with_capacity(n);

    let mut tok = ReplayToken { seed, index: 0 };
    for _ in 0..count {
        let word = draw_word(cfg, tok);
        let surface = Surface::from_word(&word)?;
        let class = classify(&surface)?;
        index.push(tok.index);
        words.push(format_word(&word));
        vertices.push(surface.vertex_count() as u64);
        orientable.push(class.orientable);
        genus.push(class.genus as u64);
        chi.push(surface.euler_characteristic());
        names.push(class.name());
        tok = tok.next();
    }

    let df = df!(
        "index" => index,
        "word" => words,
        "vertices" => vertices,
        "orientable" => orientable,
        "genus" => genus,
        "chi" => chi,
        "name" => names,
    )?;
    Ok(df)
}

/// Write as Parquet when the extension says so, CSV otherwise.
pub fn write_frame(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match out.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            ParquetWriter::new(file).finish(df)?;
        }
        _ => {
            let mut file = file;
            CsvWriter::new(&mut file).include_header(true).finish(df)?;
        }
    }
    Ok(())
}

/// Number of orientable rows, computed lazily.
pub fn orientable_rows(df: &DataFrame) -> Result<usize> {
    let hits = df
        .clone()
        .lazy()
        .filter(col("orientable").eq(lit(true)))
        .collect()?;
    Ok(hits.height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use surfclass::sample::LetterCount;
    use tempfile::tempdir;

    fn cfg() -> SampleCfg {
        SampleCfg {
            letters: LetterCount::Fixed(3),
            orientable_only: false,
        }
    }

    #[test]
    fn frame_has_one_row_per_draw() {
        let df = sample_frame(cfg(), 5, 12).unwrap();
        assert_eq!(df.shape(), (12, 7));
        assert!(df.equals(&sample_frame(cfg(), 5, 12).unwrap()));
    }

    #[test]
    fn orientable_only_rows_are_all_orientable() {
        let only = SampleCfg {
            orientable_only: true,
            ..cfg()
        };
        let df = sample_frame(only, 9, 10).unwrap();
        assert_eq!(orientable_rows(&df).unwrap(), 10);
    }

    #[test]
    fn writes_csv_with_header() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("draws.csv");
        let mut df = sample_frame(cfg(), 1, 4).unwrap();
        write_frame(&mut df, &out).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("index,word,vertices,orientable,genus,chi,name")
        );
        assert_eq!(lines.count(), 4);
    }
}
