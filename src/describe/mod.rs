// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Natural-language frame summaries over the enriched detection list
//!
//! Two pure functions: a short sentence with English list grammar and a
//! per-class detail report. Both consume the detection list after the size
//! orchestrator has resolved it.

use crate::detection::DetectionRecord;

/// Detections above this confidence are called out in the short summary.
const HIGH_CONFIDENCE_THRESHOLD: f32 = 0.7;

/// Group detections by class, preserving first-appearance order.
fn class_counts<'a, I>(detections: I) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a DetectionRecord>,
{
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for det in detections {
        match counts.iter_mut().find(|(c, _)| *c == det.class_label) {
            Some((_, n)) => *n += 1,
            None => counts.push((det.class_label.as_str(), 1)),
        }
    }
    counts
}

/// One-sentence summary with singular/plural phrasing and an Oxford-comma
/// list, plus a clause naming the high-confidence detections when present.
pub fn short_description(detections: &[DetectionRecord]) -> String {
    if detections.is_empty() {
        return "No objects detected in the image.".to_string();
    }

    let parts: Vec<String> = class_counts(detections)
        .into_iter()
        .map(|(class, count)| {
            if count == 1 {
                format!("a {}", class)
            } else {
                format!("{} {}s", count, class)
            }
        })
        .collect();

    let mut description = match parts.as_slice() {
        [only] => format!("The image contains {}.", only),
        [first, second] => format!("The image contains {} and {}.", first, second),
        _ => {
            let (last, rest) = parts.split_last().expect("parts is non-empty");
            format!("The image contains {}, and {}.", rest.join(", "), last)
        }
    };

    let high_conf: Vec<&DetectionRecord> = detections
        .iter()
        .filter(|d| d.confidence > HIGH_CONFIDENCE_THRESHOLD)
        .collect();
    if !high_conf.is_empty() {
        let items: Vec<String> = class_counts(high_conf.into_iter())
            .into_iter()
            .map(|(class, count)| {
                if count > 1 {
                    format!("{} {}s", count, class)
                } else {
                    class.to_string()
                }
            })
            .collect();
        description.push_str(&format!(
            " The most confident detections include {}.",
            items.join(", ")
        ));
    }

    description
}

/// Per-class report: count and mean confidence, one line per class, classes
/// ordered by descending detection count.
pub fn detailed_description(detections: &[DetectionRecord]) -> String {
    if detections.is_empty() {
        return "No objects were detected with sufficient confidence.".to_string();
    }

    let mut stats: Vec<(&str, usize, f64)> = Vec::new();
    for det in detections {
        match stats.iter_mut().find(|(c, _, _)| *c == det.class_label) {
            Some((_, count, conf_sum)) => {
                *count += 1;
                *conf_sum += det.confidence as f64;
            }
            None => stats.push((det.class_label.as_str(), 1, det.confidence as f64)),
        }
    }
    // Stable sort keeps first-appearance order among equal counts
    stats.sort_by(|a, b| b.1.cmp(&a.1));

    let mut details = String::new();
    for (class, count, conf_sum) in stats {
        let mean = conf_sum / count as f64;
        let rounded = (mean * 100.0).round() / 100.0;
        details.push_str(&format!(
            "\u{2022} {} {}(s) with {:.1}% average confidence\n",
            count,
            class,
            rounded * 100.0
        ));
    }
    details
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::BoundingBox;

    fn det(class: &str, confidence: f32) -> DetectionRecord {
        DetectionRecord::new(class, confidence, BoundingBox::new(0.0, 0.0, 10.0, 10.0))
    }

    #[test]
    fn test_short_empty() {
        assert_eq!(short_description(&[]), "No objects detected in the image.");
    }

    #[test]
    fn test_short_single_object() {
        let detections = vec![det("FireExtinguisher", 0.5)];
        assert_eq!(
            short_description(&detections),
            "The image contains a FireExtinguisher."
        );
    }

    #[test]
    fn test_short_two_classes() {
        let detections = vec![det("Person", 0.5), det("Vehicle", 0.6)];
        assert_eq!(
            short_description(&detections),
            "The image contains a Person and a Vehicle."
        );
    }

    #[test]
    fn test_short_oxford_comma() {
        let detections = vec![det("Person", 0.5), det("Vehicle", 0.6), det("ToolBox", 0.4)];
        assert_eq!(
            short_description(&detections),
            "The image contains a Person, a Vehicle, and a ToolBox."
        );
    }

    #[test]
    fn test_short_plural_grouping() {
        let detections = vec![det("OxygenTank", 0.5), det("OxygenTank", 0.6)];
        assert_eq!(
            short_description(&detections),
            "The image contains 2 OxygenTanks."
        );
    }

    #[test]
    fn test_high_confidence_clause_plural() {
        let detections = vec![det("Person", 0.9), det("Person", 0.9)];
        let text = short_description(&detections);
        assert!(
            text.ends_with(" The most confident detections include 2 Persons."),
            "got: {}",
            text
        );
    }

    #[test]
    fn test_high_confidence_clause_singular_is_bare_class() {
        let detections = vec![det("Person", 0.9), det("Vehicle", 0.3)];
        let text = short_description(&detections);
        assert!(
            text.ends_with(" The most confident detections include Person."),
            "got: {}",
            text
        );
    }

    #[test]
    fn test_no_high_confidence_clause_at_threshold() {
        // Strictly greater than 0.7
        let detections = vec![det("Person", 0.7)];
        assert_eq!(
            short_description(&detections),
            "The image contains a Person."
        );
    }

    #[test]
    fn test_detailed_empty() {
        assert_eq!(
            detailed_description(&[]),
            "No objects were detected with sufficient confidence."
        );
    }

    #[test]
    fn test_detailed_mean_confidence() {
        let detections = vec![det("Person", 0.8), det("Person", 0.9)];
        let text = detailed_description(&detections);
        assert_eq!(
            text,
            "\u{2022} 2 Person(s) with 85.0% average confidence\n"
        );
    }

    #[test]
    fn test_detailed_orders_by_descending_count() {
        let detections = vec![
            det("Vehicle", 0.6),
            det("Person", 0.8),
            det("Person", 0.9),
            det("Person", 0.7),
        ];
        let text = detailed_description(&detections);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].contains("3 Person(s)"));
        assert!(lines[1].contains("1 Vehicle(s)"));
    }

    #[test]
    fn test_descriptions_are_pure() {
        let detections = vec![det("Person", 0.8), det("Vehicle", 0.6)];
        assert_eq!(short_description(&detections), short_description(&detections));
        assert_eq!(
            detailed_description(&detections),
            detailed_description(&detections)
        );
    }
}
