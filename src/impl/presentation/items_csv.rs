use crate::{entities::Report, errors::ReportError};

/// Flat CSV export of a report's line items, with a trailing total row.
pub struct ItemsCsvPrinter;

impl ItemsCsvPrinter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_items(&self, report: &Report) -> Result<String, ReportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(["location", "transportation", "cost"])
            .map_err(csv_error)?;
        for item in &report.items {
            writer
                .write_record([
                    item.location.as_str(),
                    item.transportation.as_str(),
                    &format!("{:.2}", item.cost),
                ])
                .map_err(csv_error)?;
        }
        writer
            .write_record(["total", "", &format!("{:.2}", report.total_cost)])
            .map_err(csv_error)?;
        let bytes = writer.into_inner().map_err(|e| ReportError::Export {
            details: e.to_string(),
        })?;
        String::from_utf8(bytes).map_err(|e| ReportError::Export {
            details: e.to_string(),
        })
    }
}

impl Default for ItemsCsvPrinter {
    fn default() -> Self {
        Self::new()
    }
}

fn csv_error(e: csv::Error) -> ReportError {
    ReportError::Export {
        details: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::logic::visit_log::fixtures::report;

    use super::*;

    #[test]
    fn writes_items_and_total_row() {
        let r = report(
            (2024, 5, 3),
            &[("Lekki", "Bus", 500.0), ("Ikeja", "Keke", 300.0)],
        );
        let csv_text = ItemsCsvPrinter::new().print_items(&r).unwrap();
        let lines: Vec<&str> = csv_text.trim_end().lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "location,transportation,cost");
        assert_eq!(lines[1], "Lekki,Bus,500.00");
        assert_eq!(lines[3], "total,,800.00");
    }
}
