use chrono::{DateTime, Utc};
use iso_currency::Currency;

use crate::{
    entities::{DocumentBlock, DocumentPage, ExportDocument, ItemRow, Report},
    presentation::utils::format_amount,
};

const DEFAULT_ROWS_PER_PAGE: usize = 20;

/// Lays a single report out as a paginated document: header, optional
/// description, the item table chunked across pages, a total row, and the
/// payment-instruction block echoing the banking fields verbatim.
pub struct ReportDocumentPrinter {
    currency: Currency,
    rows_per_page: usize,
}

impl ReportDocumentPrinter {
    pub fn new() -> Self {
        Self {
            currency: Currency::NGN,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }

    pub fn with_currency(currency: Currency) -> Self {
        Self {
            currency,
            ..Self::new()
        }
    }

    pub fn print_document(
        &self,
        report: &Report,
        prepared_by: &str,
        generated_at: DateTime<Utc>,
    ) -> ExportDocument {
        let title = format!("{} Report - {}", report.report_type.label(), report.report_date);

        let mut header = vec![
            DocumentBlock::Heading(title.clone()),
            DocumentBlock::KeyValue {
                label: "Report Type".to_string(),
                value: report.report_type.label().to_string(),
            },
            DocumentBlock::KeyValue {
                label: "Report Date".to_string(),
                value: report.report_date.format("%Y-%m-%d").to_string(),
            },
            DocumentBlock::KeyValue {
                label: "Prepared By".to_string(),
                value: prepared_by.to_string(),
            },
            DocumentBlock::KeyValue {
                label: "Generated".to_string(),
                value: generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            },
        ];
        if let Some(description) = &report.description {
            header.push(DocumentBlock::Paragraph(description.clone()));
        }

        let mut pages: Vec<DocumentPage> = Vec::new();
        let mut chunks = report.items.chunks(self.rows_per_page).peekable();
        if chunks.peek().is_none() {
            pages.push(DocumentPage { blocks: header });
        } else {
            let mut first = true;
            while let Some(chunk) = chunks.next() {
                let mut blocks = if first {
                    first = false;
                    std::mem::take(&mut header)
                } else {
                    Vec::new()
                };
                blocks.push(DocumentBlock::ItemsTable {
                    rows: chunk
                        .iter()
                        .map(|item| ItemRow {
                            location: item.location.clone(),
                            transportation: item.transportation.clone(),
                            cost: format_amount(item.cost, self.currency),
                        })
                        .collect(),
                });
                pages.push(DocumentPage { blocks });
            }
        }

        // Total and payment details close out the last page.
        if let Some(last) = pages.last_mut() {
            last.blocks.push(DocumentBlock::TotalRow {
                label: "Total".to_string(),
                amount: format_amount(report.total_cost, self.currency),
            });
            last.blocks.push(DocumentBlock::Heading(
                "Payment Details".to_string(),
            ));
            last.blocks.push(DocumentBlock::KeyValue {
                label: "Account Name".to_string(),
                value: report.account_name.clone(),
            });
            last.blocks.push(DocumentBlock::KeyValue {
                label: "Account Number".to_string(),
                value: report.account_number.clone(),
            });
            last.blocks.push(DocumentBlock::KeyValue {
                label: "Bank".to_string(),
                value: report.bank_name.clone(),
            });
        }

        ExportDocument { title, pages }
    }
}

impl Default for ReportDocumentPrinter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::logic::visit_log::fixtures::report;

    use super::*;

    fn generated_at() -> DateTime<Utc> {
        "2024-05-03T10:15:00Z".parse().unwrap()
    }

    #[test]
    fn small_report_fits_one_page() {
        let r = report((2024, 5, 3), &[("Lekki", "Bus", 500.0), ("Ikeja", "Keke", 300.0)]);
        let document =
            ReportDocumentPrinter::new().print_document(&r, "Field Officer", generated_at());
        assert_eq!(document.pages.len(), 1);
        let blocks = &document.pages[0].blocks;
        assert!(matches!(blocks[0], DocumentBlock::Heading(_)));
        assert!(blocks.iter().any(|b| matches!(
            b,
            DocumentBlock::TotalRow { amount, .. } if amount == "₦800.00"
        )));
        assert!(blocks.iter().any(|b| matches!(
            b,
            DocumentBlock::KeyValue { label, value } if label == "Bank" && value == "GTBank"
        )));
    }

    #[test]
    fn long_item_lists_paginate() {
        let items: Vec<(String, String, f64)> = (0..45)
            .map(|i| (format!("Stop {}", i), "Bus".to_string(), 100.0))
            .collect();
        let item_refs: Vec<(&str, &str, f64)> = items
            .iter()
            .map(|(l, t, c)| (l.as_str(), t.as_str(), *c))
            .collect();
        let r = report((2024, 5, 3), &item_refs);
        let document =
            ReportDocumentPrinter::new().print_document(&r, "Field Officer", generated_at());
        assert_eq!(document.pages.len(), 3);
        // Header on the first page only; totals on the last page only.
        assert!(matches!(
            document.pages[0].blocks[0],
            DocumentBlock::Heading(_)
        ));
        assert!(!document.pages[1]
            .blocks
            .iter()
            .any(|b| matches!(b, DocumentBlock::TotalRow { .. })));
        assert!(document.pages[2]
            .blocks
            .iter()
            .any(|b| matches!(b, DocumentBlock::TotalRow { .. })));
        let rows: usize = document
            .pages
            .iter()
            .flat_map(|p| &p.blocks)
            .filter_map(|b| match b {
                DocumentBlock::ItemsTable { rows } => Some(rows.len()),
                _ => None,
            })
            .sum();
        assert_eq!(rows, 45);
    }

    #[test]
    fn item_costs_are_currency_formatted() {
        let r = report((2024, 5, 3), &[("Lekki", "Bus", 1500.5)]);
        let document =
            ReportDocumentPrinter::new().print_document(&r, "Field Officer", generated_at());
        let rows = document
            .pages
            .iter()
            .flat_map(|p| &p.blocks)
            .find_map(|b| match b {
                DocumentBlock::ItemsTable { rows } => Some(rows),
                _ => None,
            })
            .unwrap();
        assert_eq!(rows[0].cost, "₦1,500.50");
    }
}
