use clap::{Args, Parser, Subcommand};

use crate::error::{NutriError, Result};
use crate::models::{Tag, TargetRange};
use crate::search::SearchConfig;
use crate::targets::{for_age_group, from_body_metrics, general_adult, ActivityLevel, BodyMetrics, Sex};

/// NutriPlan: search for daily menus that fit nutritional targets.
#[derive(Parser, Debug)]
#[command(name = "nutri_plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search for menus that fit the derived targets.
    Plan {
        /// Food catalog: a TACO CSV table or a saved JSON catalog.
        #[arg(short, long, default_value = "taco.csv")]
        catalog: String,

        #[command(flatten)]
        targets: TargetArgs,

        #[command(flatten)]
        search: SearchArgs,

        /// Print results as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the targets derived from body metrics or an age group.
    Targets {
        #[command(flatten)]
        targets: TargetArgs,
    },

    /// Summarize a catalog, optionally exporting it as JSON.
    Catalog {
        #[arg(short, long, default_value = "taco.csv")]
        catalog: String,

        /// Write the loaded catalog to this JSON file.
        #[arg(long)]
        export: Option<String>,

        /// List the foods carrying this tag (e.g. MEAT).
        #[arg(long)]
        tag: Option<Tag>,
    },
}

/// How daily targets are derived. Body metrics win over `--age-group`;
/// with neither, the generic adult table is used.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Body weight in kilograms.
    #[arg(long, requires_all = ["height", "age", "sex"])]
    pub weight: Option<f64>,

    /// Height in centimeters.
    #[arg(long, requires = "weight")]
    pub height: Option<f64>,

    /// Age in years.
    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long, value_enum)]
    pub sex: Option<Sex>,

    #[arg(long, value_enum, default_value_t = ActivityLevel::Light)]
    pub activity: ActivityLevel,

    /// Use the fixed table for this age instead of body metrics.
    #[arg(long, conflicts_with = "weight")]
    pub age_group: Option<u32>,
}

impl TargetArgs {
    pub fn resolve(&self) -> Result<TargetRange> {
        match (self.weight, self.height, self.age, self.sex) {
            (Some(weight_kg), Some(height_cm), Some(age), Some(sex)) => {
                from_body_metrics(&BodyMetrics {
                    weight_kg,
                    height_cm,
                    age,
                    sex,
                    activity: self.activity,
                })
            }
            (None, None, _, None) => Ok(match self.age_group.or(self.age) {
                Some(age) => for_age_group(age),
                None => general_adult(),
            }),
            _ => Err(NutriError::InvalidInput(
                "body metrics need --weight, --height, --age and --sex together".to_string(),
            )),
        }
    }
}

/// Search knobs. Flags override values loaded from `--config`.
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// JSON file with search parameters.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long)]
    pub population: Option<usize>,

    #[arg(long)]
    pub generations: Option<usize>,

    #[arg(long)]
    pub mutation_rate: Option<f64>,

    #[arg(long)]
    pub elite: Option<usize>,

    /// Seed for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cap on foods per meal for the add mutation.
    #[arg(long)]
    pub max_foods: Option<usize>,

    /// Evaluate fitness on a single thread.
    #[arg(long)]
    pub sequential: bool,
}

impl SearchArgs {
    pub fn resolve(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::load(path)?,
            None => SearchConfig::default(),
        };

        if let Some(n) = self.population {
            config.population_size = n;
        }
        if let Some(n) = self.generations {
            config.generation_count = n;
        }
        if let Some(rate) = self.mutation_rate {
            config.mutation_rate = rate;
        }
        if let Some(n) = self.elite {
            config.elite_size = n;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(cap) = self.max_foods {
            config.max_foods_per_meal = Some(cap);
        }
        if self.sequential {
            config.parallel = false;
        }

        config.validate()?;
        Ok(config)
    }
}
