use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use invsample_rs::{Histogram, SampleFloat};

/// `pdf_<deposit_all>.txt` inside `dir`
pub fn pdf_path(dir: &Path, deposit_all: bool) -> PathBuf {
    dir.join(format!("pdf_{}.txt", deposit_all))
}

/// One row per bin: index, bin center, normalized density.
pub fn write_pdf<F: SampleFloat, W: Write>(out: &mut W, pdf: &Histogram<F>) -> Result<()> {
    let x = pdf.get_bin_centers();
    let y = pdf.get_pdf()?;
    assert_eq!(x.len(), y.len());
    for (n, (x, y)) in x.iter().zip(y.iter()).enumerate() {
        writeln!(out, "{:>6}   {:>8.6}   {:>9.6}", n, x.as_f64(), y.as_f64())?;
    }
    Ok(())
}

pub fn write_pdf_file<F: SampleFloat>(path: &Path, pdf: &Histogram<F>) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_pdf(&mut writer, pdf)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_fixed_width() {
        let mut pdf = Histogram::<f64>::new(2).unwrap();
        pdf.deposit(0.25);
        let mut buf = Vec::new();
        write_pdf(&mut buf, &pdf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "     0   0.250000    1.000000\n     1   0.750000    0.000000\n"
        );
    }

    #[test]
    fn empty_histogram_fails() {
        let pdf = Histogram::<f64>::new(2).unwrap();
        let mut buf = Vec::new();
        assert!(write_pdf(&mut buf, &pdf).is_err());
    }

    #[test]
    fn file_name_carries_mode() {
        assert_eq!(
            pdf_path(Path::new("out"), false),
            PathBuf::from("out/pdf_false.txt")
        );
    }
}
