use crate::inspection::domain::{EnrichedHead, LineRecord, ReportRow};
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;

/// ReportShaper - projects head records and their detail lines into a
/// two-tier table
pub struct ReportShaper;

impl ReportShaper {
    /// Shapes `heads` into group-header and detail rows
    ///
    /// For each head, in order: one group row, then one row per detail line
    /// in the order returned, or a single placeholder row when there are no
    /// lines. Groups are not separated by blank rows. `progress` receives
    /// `(groups_done, total_groups)` after each group.
    ///
    /// # Errors
    /// A failing detail fetch aborts shaping.
    pub fn shape<F>(
        heads: &[EnrichedHead],
        mut fetch_details: F,
        progress: &dyn ProgressReporter,
    ) -> Result<Vec<ReportRow>>
    where
        F: FnMut(&EnrichedHead) -> Result<Vec<LineRecord>>,
    {
        let total = heads.len();
        let mut rows = Vec::with_capacity(total * 2);

        for (index, head) in heads.iter().enumerate() {
            rows.push(ReportRow::group(head));

            let lines = fetch_details(head)?;
            if lines.is_empty() {
                rows.push(ReportRow::placeholder(head));
            } else {
                rows.extend(lines.iter().map(|line| ReportRow::detail(head, line)));
            }

            progress.report_progress(index + 1, total, head.head.item_code.as_deref());
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspection::domain::{EquipmentInfo, HeadRecord, RowKind, NO_DETAILS_LABEL};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingProgress {
        calls: RefCell<Vec<(usize, usize)>>,
    }

    impl ProgressReporter for RecordingProgress {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
            self.calls.borrow_mut().push((current, total));
        }
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    fn head(id: i64) -> EnrichedHead {
        EnrichedHead::new(
            HeadRecord {
                mfg_inspection_id: Some(id),
                item_code: Some(format!("ITEM-{}", id)),
                ..Default::default()
            },
            EquipmentInfo::default(),
        )
    }

    fn lines(count: usize) -> Vec<LineRecord> {
        (0..count)
            .map(|i| LineRecord {
                level3_class_name: Some(format!("check-{}", i)),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_row_counts_and_group_offsets() {
        let details = [2usize, 0, 3, 1];
        let heads: Vec<_> = (0..details.len() as i64).map(head).collect();
        let progress = RecordingProgress::default();

        let rows = ReportShaper::shape(
            &heads,
            |h| Ok(lines(details[h.head.mfg_inspection_id.unwrap() as usize])),
            &progress,
        )
        .unwrap();

        let expected: usize = heads.len() + details.iter().map(|d| (*d).max(1)).sum::<usize>();
        assert_eq!(rows.len(), expected);

        let mut offset = 0;
        for d in details {
            assert!(rows[offset].is_group());
            for row in &rows[offset + 1..offset + 1 + d.max(1)] {
                assert_eq!(row.kind, RowKind::Detail);
            }
            offset += 1 + d.max(1);
        }
    }

    #[test]
    fn test_detail_order_preserved() {
        let progress = RecordingProgress::default();
        let rows = ReportShaper::shape(&[head(1)], |_| Ok(lines(3)), &progress).unwrap();
        let checks: Vec<_> = rows[1..].iter().map(|r| r.check_item.as_str()).collect();
        assert_eq!(checks, vec!["check-0", "check-1", "check-2"]);
    }

    #[test]
    fn test_empty_details_emit_placeholder() {
        let progress = RecordingProgress::default();
        let rows = ReportShaper::shape(&[head(1)], |_| Ok(vec![]), &progress).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].check_item, NO_DETAILS_LABEL);
    }

    #[test]
    fn test_progress_after_each_group() {
        let progress = RecordingProgress::default();
        let heads = vec![head(1), head(2), head(3)];
        ReportShaper::shape(&heads, |_| Ok(lines(1)), &progress).unwrap();
        assert_eq!(*progress.calls.borrow(), vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn test_detail_failure_aborts() {
        let progress = RecordingProgress::default();
        let heads = vec![head(1), head(2)];
        let result = ReportShaper::shape(
            &heads,
            |h| {
                if h.head.mfg_inspection_id == Some(2) {
                    anyhow::bail!("HTTP 500");
                }
                Ok(lines(1))
            },
            &progress,
        );
        assert!(result.is_err());
        assert_eq!(progress.calls.borrow().len(), 1);
    }

    #[test]
    fn test_no_heads_no_rows() {
        let progress = RecordingProgress::default();
        let rows = ReportShaper::shape(&[], |_| Ok(lines(1)), &progress).unwrap();
        assert!(rows.is_empty());
    }
}
