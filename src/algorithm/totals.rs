use crate::algorithm::gauges::gauge_color;
use crate::algorithm::text::{normalize, wrap, DEFAULT_WRAP_WIDTH};
use crate::models::{Category, ScoreRecord, TotalGauge, Variant};

/// Running sum of percentage scores for one normalized title.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateBucket {
    pub total_score: f64,
    pub count: usize,
}

impl AggregateBucket {
    fn first(percentage: f64) -> Self {
        AggregateBucket {
            total_score: percentage,
            count: 1,
        }
    }

    fn add(&mut self, percentage: f64) {
        self.total_score += percentage;
        self.count += 1;
    }

    /// Never divides by zero: a bucket only exists once a row was added.
    pub fn average(&self) -> f64 {
        self.total_score / self.count as f64
    }
}

/// Buckets per normalized title, in first-insertion order.
pub type TitleBuckets = Vec<(String, AggregateBucket)>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    pub skill: TitleBuckets,
    pub non_skill: TitleBuckets,
}

impl Totals {
    #[cfg(test)]
    fn bucket(&self, category: Category, title: &str) -> Option<&AggregateBucket> {
        self.buckets(category)
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, b)| b)
    }

    pub fn buckets(&self, category: Category) -> &TitleBuckets {
        match category {
            Category::Skill => &self.skill,
            Category::NonSkill => &self.non_skill,
        }
    }

    /// `(title, average percentage)` pairs for one category.
    pub fn averages(&self, category: Category) -> Vec<(String, f64)> {
        self.buckets(category)
            .iter()
            .map(|(title, b)| (title.clone(), b.average()))
            .collect()
    }

    pub fn into_gauges(self, color_coded: bool) -> (Vec<TotalGauge>, Vec<TotalGauge>) {
        let convert = |buckets: TitleBuckets| -> Vec<TotalGauge> {
            buckets
                .into_iter()
                .map(|(title, b)| {
                    let percentage = b.average();
                    TotalGauge {
                        label: wrap(&title, DEFAULT_WRAP_WIDTH),
                        title,
                        percentage,
                        color: gauge_color(percentage, color_coded),
                        count: b.count,
                    }
                })
                .collect()
        };
        (convert(self.skill), convert(self.non_skill))
    }
}

/// Averages `average_score * 100` per normalized title, separately for
/// skill-category rows and all other rows.
pub fn build_totals(rows: &[&ScoreRecord], variant: Variant) -> Totals {
    let mut totals = Totals::default();

    for row in rows {
        let title = normalize(&row.skill_or_passage, variant.strip_bare_prefixes);
        let percentage = row.percentage();
        let target = match row.category() {
            Category::Skill => &mut totals.skill,
            Category::NonSkill => &mut totals.non_skill,
        };
        match target.iter_mut().find(|(t, _)| *t == title) {
            Some((_, bucket)) => bucket.add(percentage),
            None => target.push((title, AggregateBucket::first(percentage))),
        }
    }

    totals
}
