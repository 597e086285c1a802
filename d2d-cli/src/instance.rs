//! Instance command: load inputs, select a drone and print the bundle.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use d2d_core::{
    DroneModel, InstanceBundle, RangeType, RunParameters, SpeedType, require_variant,
    write_instance,
};
use d2d_data::{ProblemsRoot, load_drone_configs, load_problem, load_truck_config};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_PROBLEM, ARG_PROBLEMS_DIR, CliError, DEFAULT_PROBLEMS_DIR, ENV_PROBLEM};

/// CLI arguments of the instance driver.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "instance",
    bin_name = "d2d-instance",
    about = "Print a truck-and-drone routing instance in canonical form",
    long_about = "Load a problem file together with the truck and drone \
                 configuration files beneath a problems directory, select \
                 one drone configuration by model, speed type and range \
                 type, and print the assembled instance on stdout. Values \
                 can come from CLI flags, configuration files, or \
                 environment variables.",
    version
)]
#[ortho_config(prefix = "D2D")]
pub(crate) struct InstanceArgs {
    /// Problem file name beneath `data/`, with or without `.txt`.
    #[arg(value_name = "problem")]
    #[serde(default)]
    pub(crate) problem: Option<String>,
    /// Number of optimizer iterations.
    #[arg(short = 'i', long, value_name = "count")]
    #[serde(default)]
    pub(crate) iterations: Option<usize>,
    /// Tabu list length.
    #[arg(short = 't', long, value_name = "size")]
    #[serde(default)]
    pub(crate) tabu_size: Option<usize>,
    /// Drone energy model whose configuration file is read.
    #[arg(short = 'c', long, value_enum, value_name = "model")]
    #[serde(default)]
    pub(crate) config: Option<DroneModel>,
    /// Requested drone speed class.
    #[arg(long, value_enum, value_name = "class")]
    #[serde(default)]
    pub(crate) speed_type: Option<SpeedType>,
    /// Requested drone range class.
    #[arg(long, value_enum, value_name = "class")]
    #[serde(default)]
    pub(crate) range_type: Option<RangeType>,
    /// Ask the optimizer to log progress.
    #[arg(short = 'v', long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) verbose: bool,
    /// Directory holding `config_parameter/` and `data/`.
    #[arg(long = ARG_PROBLEMS_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) problems_dir: Option<Utf8PathBuf>,
}

impl InstanceArgs {
    pub(crate) fn into_config(self) -> Result<InstanceConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        InstanceConfig::try_from(merged)
    }
}

/// Resolved instance command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InstanceConfig {
    /// Problem name as given.
    pub(crate) problem: String,
    /// Pass-through optimizer settings.
    pub(crate) run: RunParameters,
    /// Drone model to load.
    pub(crate) model: DroneModel,
    /// Requested speed class.
    pub(crate) speed_type: SpeedType,
    /// Requested range class.
    pub(crate) range_type: RangeType,
    /// Root of the input tree.
    pub(crate) problems_dir: Utf8PathBuf,
}

impl InstanceConfig {
    pub(crate) fn validate_problems_dir(&self) -> Result<(), CliError> {
        Self::require_directory(&self.problems_dir)
    }

    fn require_directory(path: &Utf8Path) -> Result<(), CliError> {
        match d2d_fs::dir_is_dir(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::ProblemsDirNotDirectory {
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingProblemsDir {
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectProblemsDir {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<InstanceArgs> for InstanceConfig {
    type Error = CliError;

    fn try_from(args: InstanceArgs) -> Result<Self, Self::Error> {
        let problem = args.problem.ok_or(CliError::MissingArgument {
            field: ARG_PROBLEM,
            env: ENV_PROBLEM,
        })?;
        let run = RunParameters::new(
            args.iterations.unwrap_or(RunParameters::DEFAULT_ITERATIONS),
            args.tabu_size.unwrap_or(RunParameters::DEFAULT_TABU_SIZE),
            args.verbose,
        );
        Ok(Self {
            problem,
            run,
            model: args.config.unwrap_or_default(),
            speed_type: args.speed_type.unwrap_or_default(),
            range_type: args.range_type.unwrap_or_default(),
            problems_dir: args
                .problems_dir
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_PROBLEMS_DIR)),
        })
    }
}

pub(crate) fn run_instance(args: InstanceArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_instance_with(args, &mut stdout)
}

/// Resolve `args`, assemble the bundle and write it to `writer`.
///
/// Nothing reaches `writer` unless every input loaded and a drone was
/// selected.
pub(crate) fn run_instance_with(
    args: InstanceArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_instance_config(args)?;
    let bundle = assemble_bundle(&config)?;
    write_instance(writer, &bundle).map_err(CliError::WriteInstance)
}

fn resolve_instance_config(args: InstanceArgs) -> Result<InstanceConfig, CliError> {
    let config = args.into_config()?;
    config.validate_problems_dir()?;
    Ok(config)
}

pub(crate) fn assemble_bundle(config: &InstanceConfig) -> Result<InstanceBundle, CliError> {
    info!(
        "problem={} iterations={} tabu_size={} config={} speed_type={} range_type={} verbose={} problems_dir={}",
        config.problem,
        config.run.iterations,
        config.run.tabu_size,
        config.model,
        config.speed_type,
        config.range_type,
        config.run.verbose,
        config.problems_dir,
    );
    let root = ProblemsRoot::new(config.problems_dir.clone());
    let truck = load_truck_config(&root)?;
    let candidates = load_drone_configs(&root, config.model)?;
    let drone = *require_variant(
        config.model,
        &candidates,
        config.speed_type,
        config.range_type,
    )?;
    let problem = load_problem(&root, &config.problem)?;
    Ok(InstanceBundle::new(problem, config.run, truck, drone))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<InstanceConfig, CliError> {
    let merged = InstanceArgs::merge_from_layers(layers).map_err(CliError::from)?;
    InstanceConfig::try_from(merged)
}
