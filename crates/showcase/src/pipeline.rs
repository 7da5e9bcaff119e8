//! Per-venue pipeline: generate → classify → summarize → insights.

use rand::Rng;
use tracing::info;

use insights_core::types::{RestaurantVisit, SupermarketVisit};
use insights_core::{AppConfig, Domain, InsightsResult, VisitorRecord};
use insights_generator::{RestaurantParams, SupermarketParams, SyntheticGenerator};
use insights_reporting::{
    marketing_insights, summarize, Chart, ChartKind, MarketingInsight, SegmentSummary,
    SuggestionCatalog,
};
use insights_segmentation::{restaurant_rules, supermarket_rules, Classified, RuleSet};

/// Everything one venue's run produces, ready for the display sinks.
#[derive(Debug, Clone)]
pub struct DomainReport<R> {
    pub domain: Domain,
    pub records: Vec<Classified<R>>,
    pub summary: SegmentSummary,
    pub insights: Vec<MarketingInsight>,
}

impl<R: VisitorRecord> DomainReport<R> {
    /// Raw cells of the first `rows` records, without the segment column.
    pub fn preview(&self, rows: usize) -> Vec<Vec<String>> {
        self.records
            .iter()
            .take(rows)
            .map(|entry| entry.record.cells())
            .collect()
    }

    pub fn segment_chart(&self, kind: ChartKind) -> Chart {
        Chart::segments(
            kind,
            format!("{} Customer Segments", self.domain.title()),
            &self.summary,
        )
    }
}

/// Classify `records` and join the per-segment counts with `catalog`.
/// The catalog is checked against the rule set before any record is
/// classified, so a missing suggestion fails the run up front.
pub fn run_domain<R: VisitorRecord>(
    records: Vec<R>,
    rules: &RuleSet,
    catalog: &SuggestionCatalog,
) -> InsightsResult<DomainReport<R>> {
    catalog.ensure_covers(rules)?;

    let records = rules.classify_all(records);
    let summary = summarize(&records);
    let insights = marketing_insights(&summary, catalog)?;

    info!(
        domain = %R::DOMAIN,
        visitors = summary.total,
        segments = summary.counts.len(),
        "Domain pipeline complete"
    );

    Ok(DomainReport {
        domain: R::DOMAIN,
        records,
        summary,
        insights,
    })
}

/// Validated parameters, rule tables and catalogs for both venues, built
/// once per process.
pub struct Showcase {
    seed: u64,
    restaurant: RestaurantParams,
    supermarket: SupermarketParams,
    restaurant_rules: RuleSet,
    supermarket_rules: RuleSet,
    restaurant_catalog: SuggestionCatalog,
    supermarket_catalog: SuggestionCatalog,
}

impl Showcase {
    pub fn from_config(config: &AppConfig) -> InsightsResult<Self> {
        Ok(Self {
            seed: config.seed,
            restaurant: RestaurantParams::try_from(&config.restaurant)?,
            supermarket: SupermarketParams::try_from(&config.supermarket)?,
            restaurant_rules: restaurant_rules()?,
            supermarket_rules: supermarket_rules()?,
            restaurant_catalog: SuggestionCatalog::restaurant(),
            supermarket_catalog: SuggestionCatalog::supermarket(),
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Each venue draws from its own stream so either can run alone and
    /// still reproduce the tables of a combined run.
    pub fn domain_seed(&self, domain: Domain) -> u64 {
        match domain {
            Domain::Restaurant => self.seed,
            Domain::Supermarket => self.seed.wrapping_add(1),
        }
    }

    pub fn rules(&self, domain: Domain) -> &RuleSet {
        match domain {
            Domain::Restaurant => &self.restaurant_rules,
            Domain::Supermarket => &self.supermarket_rules,
        }
    }

    pub fn restaurant_report(&self) -> InsightsResult<DomainReport<RestaurantVisit>> {
        let mut generator = SyntheticGenerator::seeded(self.domain_seed(Domain::Restaurant));
        self.restaurant_report_with(&mut generator)
    }

    pub fn restaurant_report_with<G: Rng>(
        &self,
        generator: &mut SyntheticGenerator<G>,
    ) -> InsightsResult<DomainReport<RestaurantVisit>> {
        let visits = generator.restaurant(&self.restaurant);
        run_domain(visits, &self.restaurant_rules, &self.restaurant_catalog)
    }

    pub fn supermarket_report(&self) -> InsightsResult<DomainReport<SupermarketVisit>> {
        let mut generator = SyntheticGenerator::seeded(self.domain_seed(Domain::Supermarket));
        self.supermarket_report_with(&mut generator)
    }

    pub fn supermarket_report_with<G: Rng>(
        &self,
        generator: &mut SyntheticGenerator<G>,
    ) -> InsightsResult<DomainReport<SupermarketVisit>> {
        let visits = generator.supermarket(&self.supermarket);
        run_domain(visits, &self.supermarket_rules, &self.supermarket_catalog)
    }
}
