// src/extract/record.rs
use serde::Serialize;

use super::clean::{clean_density, clean_name};

// Position → field mapping, 0-indexed against the row's th/td cells.
// The source table interleaves figures we don't want (2010 population,
// absolute change, land area) between the ones we do.
pub const NAME_POSITION: usize = 0;
pub const POPULATION_POSITION: usize = 3;
pub const CHANGE_POSITION: usize = 5;
pub const DENSITY_POSITION: usize = 7;

/// One municipality row. Serde renames carry the exact CSV header strings,
/// in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(rename = "Municipality")]
    pub municipality: String,
    #[serde(rename = "Population 2020")]
    pub population_2020: String,
    #[serde(rename = "Population change 2010-2020 (%)")]
    pub population_change: String,
    #[serde(rename = "Population density 2020")]
    pub density_2020: String,
}

impl Record {
    /// Build a record from a row's cell texts (already flattened, one string
    /// per cell, in document order). Positions past the end of the row come
    /// out as empty strings; a short row is never a fault.
    pub fn from_cells(cells: &[String]) -> Self {
        let at = |i: usize| cells.get(i).map(|s| s.trim()).unwrap_or_default();
        Record {
            municipality: clean_name(at(NAME_POSITION)),
            population_2020: at(POPULATION_POSITION).to_string(),
            population_change: at(CHANGE_POSITION).to_string(),
            density_2020: clean_density(at(DENSITY_POSITION)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn maps_positions_to_fields_in_header_order() {
        let row = cells(&[
            "Denver[1]",
            "County seat",
            "600,158",
            "715,522",
            "115,364",
            "+19.22%",
            "153.3 sq mi",
            "1162/sq mi449/km2",
        ]);
        let rec = Record::from_cells(&row);
        assert_eq!(rec.municipality, "Denver");
        assert_eq!(rec.population_2020, "715,522");
        assert_eq!(rec.population_change, "+19.22%");
        assert_eq!(rec.density_2020, "449");
    }

    #[test]
    fn short_row_yields_empty_fields_without_fault() {
        let rec = Record::from_cells(&cells(&["Cañon City", "x", "y", "17,141"]));
        assert_eq!(rec.municipality, "Cañon City");
        assert_eq!(rec.population_2020, "17,141");
        assert_eq!(rec.population_change, "");
        assert_eq!(rec.density_2020, "");
    }

    #[test]
    fn empty_row_yields_all_empty_fields() {
        let rec = Record::from_cells(&[]);
        assert_eq!(
            rec,
            Record {
                municipality: String::new(),
                population_2020: String::new(),
                population_change: String::new(),
                density_2020: String::new(),
            }
        );
    }
}
