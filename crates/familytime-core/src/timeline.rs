//! Life-stage timeline for each child across the estimate window.

use serde::{Deserialize, Serialize};

use crate::estimate::tables::{max_weekday_base_hours, weekday_base_hours};
use crate::estimate::{Child, EstimateWindow};
use crate::stage::ChildAgeGroup;

/// How demanding a stage is, relative to the most demanding one (0.0-1.0).
pub fn stage_intensity(stage: ChildAgeGroup) -> f64 {
    let max = max_weekday_base_hours();
    if max <= 0.0 {
        return 0.0;
    }
    weekday_base_hours(stage) / max
}

/// Stage of `child` during `year`, sampled at mid-year like the estimate.
pub fn stage_in_year(child: &Child, year: i32) -> ChildAgeGroup {
    if child.whole_age(year) < 0 {
        ChildAgeGroup::NotBornYet
    } else {
        ChildAgeGroup::from_age(child.age_at_mid_year(year))
    }
}

/// Consecutive years spent in one stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageSegment {
    pub stage: ChildAgeGroup,
    /// First year of the segment (inclusive)
    pub start_year: i32,
    /// Last year of the segment (inclusive)
    pub end_year: i32,
    pub intensity: f64,
}

impl StageSegment {
    pub fn years(&self) -> usize {
        (self.end_year - self.start_year + 1).max(0) as usize
    }
}

/// Stage segments of one child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildTimeline {
    /// Position of the child in the input list
    pub index: usize,
    pub birth_year: i32,
    pub segments: Vec<StageSegment>,
}

impl ChildTimeline {
    /// Build the segments of `child` inside `window`.
    pub fn new(index: usize, child: &Child, window: EstimateWindow) -> Self {
        let mut segments: Vec<StageSegment> = Vec::new();
        for year in window.years() {
            let stage = stage_in_year(child, year);
            match segments.last_mut() {
                Some(last) if last.stage == stage => last.end_year = year,
                _ => segments.push(StageSegment {
                    stage,
                    start_year: year,
                    end_year: year,
                    intensity: stage_intensity(stage),
                }),
            }
        }
        Self {
            index,
            birth_year: child.birth_calendar_year(),
            segments,
        }
    }

    /// Stage in a given year, if the year is covered.
    pub fn stage_at(&self, year: i32) -> Option<ChildAgeGroup> {
        self.segments
            .iter()
            .find(|s| s.start_year <= year && year <= s.end_year)
            .map(|s| s.stage)
    }

    /// One character per year, shaded by stage intensity.
    pub fn render_ascii(&self) -> String {
        self.segments
            .iter()
            .flat_map(|segment| {
                let cell = shade(segment.stage, segment.intensity);
                std::iter::repeat(cell).take(segment.years())
            })
            .collect()
    }
}

fn shade(stage: ChildAgeGroup, intensity: f64) -> char {
    if stage == ChildAgeGroup::NotBornYet {
        '·'
    } else if intensity >= 0.9 {
        '█'
    } else if intensity >= 0.6 {
        '▓'
    } else if intensity >= 0.4 {
        '▒'
    } else if intensity > 0.0 {
        '░'
    } else {
        ' '
    }
}

/// Legend for [`ChildTimeline::render_ascii`].
pub const ASCII_LEGEND: &str = "█ infancy/toddler  ▓ early childhood  ▒ school age  ░ teens  · not born, blank once grown";

/// Timelines for every child over the family's estimate window.
pub fn timeline(children: &[Child]) -> Vec<ChildTimeline> {
    let Some(window) = EstimateWindow::for_children(children) else {
        return Vec::new();
    };
    children
        .iter()
        .enumerate()
        .map(|(index, child)| ChildTimeline::new(index, child, window))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_scale() {
        assert_eq!(stage_intensity(ChildAgeGroup::Infancy), 1.0);
        assert_eq!(stage_intensity(ChildAgeGroup::MiddleChildhood), 0.5);
        assert_eq!(stage_intensity(ChildAgeGroup::NotBornYet), 0.0);
        assert_eq!(stage_intensity(ChildAgeGroup::Adulthood), 0.0);
    }

    #[test]
    fn test_single_child_segments() {
        let lines = timeline(&[Child::new(2020.0)]);
        assert_eq!(lines.len(), 1);
        let stages: Vec<_> = lines[0]
            .segments
            .iter()
            .map(|s| (s.stage, s.start_year, s.end_year))
            .collect();
        assert_eq!(
            stages,
            vec![
                (ChildAgeGroup::NotBornYet, 2018, 2019),
                (ChildAgeGroup::Infancy, 2020, 2020),
                (ChildAgeGroup::Toddler, 2021, 2022),
                (ChildAgeGroup::EarlyChildhood, 2023, 2025),
                (ChildAgeGroup::MiddleChildhood, 2026, 2031),
                (ChildAgeGroup::Adolescence, 2032, 2037),
                (ChildAgeGroup::Adulthood, 2038, 2040),
            ]
        );
    }

    #[test]
    fn test_segments_cover_window_without_gaps() {
        let children = vec![Child::new(2012.0), Child::new(2019.0)];
        let window = EstimateWindow::for_children(&children).unwrap();
        for line in timeline(&children) {
            assert_eq!(line.segments.first().unwrap().start_year, window.start_year);
            assert_eq!(line.segments.last().unwrap().end_year, window.end_year);
            for pair in line.segments.windows(2) {
                assert_eq!(pair[0].end_year + 1, pair[1].start_year);
                assert_ne!(pair[0].stage, pair[1].stage);
            }
            assert_eq!(line.render_ascii().chars().count(), window.len());
        }
    }

    #[test]
    fn test_stage_at() {
        let line = &timeline(&[Child::new(2000.0)])[0];
        assert_eq!(line.stage_at(1999), Some(ChildAgeGroup::NotBornYet));
        assert_eq!(line.stage_at(2010), Some(ChildAgeGroup::MiddleChildhood));
        assert_eq!(line.stage_at(1990), None);
    }

    #[test]
    fn test_empty_family_has_no_timeline() {
        assert!(timeline(&[]).is_empty());
    }
}
