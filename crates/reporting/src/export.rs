//! CSV export of classified visitor tables.

use insights_core::VisitorRecord;
use insights_segmentation::Classified;

fn csv_cell(cell: &str) -> String {
    if cell.contains(&[',', '"', '\n'][..]) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn csv_line(cells: impl IntoIterator<Item = impl AsRef<str>>) -> String {
    let mut line = cells
        .into_iter()
        .map(|c| csv_cell(c.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

pub fn to_csv<R: VisitorRecord>(records: &[Classified<R>]) -> String {
    let mut csv = csv_line(Classified::<R>::columns());
    for entry in records {
        csv.push_str(&csv_line(entry.cells()));
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use insights_core::types::{MealPreference, RestaurantVisit, VisitTime};

    #[test]
    fn test_csv_has_header_and_segment_column() {
        let records = vec![Classified {
            record: RestaurantVisit {
                visitor_id: 1,
                arrival_time: NaiveDate::from_ymd_opt(2025, 5, 25)
                    .unwrap()
                    .and_hms_opt(12, 15, 0)
                    .unwrap(),
                duration_minutes: 40,
                frequent_visitor: true,
                meal_preference: MealPreference::Both,
                time_of_visit: VisitTime::Lunch,
            },
            segment: "Loyal Local Lunch Goers".to_string(),
        }];

        let csv = to_csv(&records);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Visitor ID,Arrival Time,Duration (minutes),Frequent Visitor,Meal Type Preference,Time of Visit,Segment"
        );
        assert_eq!(
            lines[1],
            "1,2025-05-25 12:15:00,40,Yes,Both,Lunch,Loyal Local Lunch Goers"
        );
    }

    #[test]
    fn test_cells_with_commas_are_quoted() {
        assert_eq!(csv_cell("a,b"), "\"a,b\"");
        assert_eq!(csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_cell("plain"), "plain");
    }
}
