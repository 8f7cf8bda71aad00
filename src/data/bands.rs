use super::read_data_file;
use crate::error::{RaterError, Result};
use crate::types::band::{AggregateBand, BandTable};
use std::io::Read;
use std::path::Path;

pub fn load_bands(path: &Path) -> Result<BandTable> {
    let content = read_data_file(path)?;
    parse_bands(content.as_bytes())
        .map_err(|err| RaterError::DataFormat(format!("{}: {}", path.display(), err)))
}

/// Reads `lower,upper,label` rows and sorts them ascending by `lower`.
pub fn parse_bands<R: Read>(reader: R) -> Result<BandTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut bands = Vec::new();
    for record in csv_reader.deserialize::<AggregateBand>() {
        let mut band = record?;
        band.label = band.label.trim().to_string();
        if band.label.is_empty() {
            return Err(RaterError::DataFormat(format!(
                "band [{}, {}] has an empty label",
                band.lower, band.upper
            )));
        }
        bands.push(band);
    }
    bands.sort_by(|a, b| a.lower.total_cmp(&b.lower));
    BandTable::new(bands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sorts_rows_by_lower_bound() {
        let csv = "lower,upper,label\n1.5,2.5, Aa1 \n0.5,1.5,Aaa\n2.5,3.5,Aa2\n";
        let table = parse_bands(csv.as_bytes()).expect("bands should parse");
        let labels: Vec<&str> = table.bands().iter().map(|band| band.label.as_str()).collect();
        assert_eq!(labels, vec!["Aaa", "Aa1", "Aa2"]);
    }

    #[test]
    fn header_only_file_is_rejected() {
        let err = parse_bands("lower,upper,label\n".as_bytes()).expect_err("no bands");
        assert!(err.to_string().contains("at least one band"));
    }

    #[test]
    fn non_numeric_bound_is_a_csv_error() {
        let err = parse_bands("lower,upper,label\nlow,1.5,Aaa\n".as_bytes())
            .expect_err("bound is not a number");
        assert!(matches!(err, RaterError::Csv(_)));
    }

    #[test]
    fn empty_label_is_rejected() {
        let err = parse_bands("lower,upper,label\n0.5,1.5,\"  \"\n".as_bytes())
            .expect_err("label is blank");
        assert!(err.to_string().contains("empty label"));
    }
}
