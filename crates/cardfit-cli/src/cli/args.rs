use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use cardfit_core::{AlphaPolicy, AspectRatio, NormalizeConfig};

use super::errors::AppError;

#[derive(Parser, Debug)]
#[command(name = "cardfit", version, about = "Trim and aspect-fit transparent card artwork")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize one PNG or every PNG in a directory
    Normalize(NormalizeArgs),

    /// List card files present in one directory but not the other
    Compare {
        /// First directory
        #[arg(value_name = "LEFT")]
        left: PathBuf,

        /// Second directory
        #[arg(value_name = "RIGHT")]
        right: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Input PNG file or directory of PNG files
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file, or output directory when INPUT is a directory
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Target height:width ratio (e.g. 1000:703)
    #[arg(long, value_name = "H:W")]
    pub ratio: Option<AspectRatio>,

    /// Border after trimming, as a fraction of each trimmed dimension
    #[arg(long, value_name = "FLOAT")]
    pub padding: Option<f64>,

    /// Margin in pixels around the detected content box
    #[arg(long, value_name = "INT")]
    pub slack: Option<u32>,

    /// Skip content trimming; only widen to the target ratio
    #[arg(long, default_value_t = false)]
    pub no_trim: bool,

    /// Accept artwork without an alpha channel by treating it as opaque
    #[arg(long, default_value_t = false)]
    pub allow_opaque: bool,

    /// JSON file with normalization settings; flags override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl NormalizeArgs {
    /// Build the pipeline config: defaults, then the config file, then flags.
    pub fn resolve_config(&self) -> Result<NormalizeConfig, AppError> {
        let mut config = match &self.config {
            Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
            None => NormalizeConfig::default(),
        };

        if let Some(ratio) = self.ratio {
            config.target_ratio = ratio;
        }
        if let Some(padding) = self.padding {
            config.trim_padding_fraction = padding;
        }
        if let Some(slack) = self.slack {
            config.bbox_slack = slack;
        }
        if self.no_trim {
            config.trim = false;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn alpha_policy(&self) -> AlphaPolicy {
        if self.allow_opaque {
            AlphaPolicy::Opaque
        } else {
            AlphaPolicy::Require
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> NormalizeArgs {
        let cli = CliArgs::try_parse_from(args).unwrap();
        match cli.command {
            Command::Normalize(args) => args,
            other => panic!("expected normalize, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["cardfit", "normalize", "in", "out"]);
        let config = args.resolve_config().unwrap();
        assert_eq!(config, NormalizeConfig::default());
        assert_eq!(args.alpha_policy(), AlphaPolicy::Require);
    }

    #[test]
    fn test_flags_override() {
        let args = parse(&[
            "cardfit",
            "normalize",
            "in",
            "out",
            "--ratio",
            "500:351",
            "--padding",
            "0.05",
            "--slack",
            "2",
            "--no-trim",
            "--allow-opaque",
        ]);
        let config = args.resolve_config().unwrap();
        assert_eq!(config.target_ratio, AspectRatio::new(500, 351).unwrap());
        assert_eq!(config.trim_padding_fraction, 0.05);
        assert_eq!(config.bbox_slack, 2);
        assert!(!config.trim);
        assert_eq!(args.alpha_policy(), AlphaPolicy::Opaque);
    }

    #[test]
    fn test_invalid_ratio_rejected_by_parser() {
        let result = CliArgs::try_parse_from(["cardfit", "normalize", "in", "out", "--ratio", "tall"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cardfit.json");
        fs::write(
            &path,
            r#"{ "target_ratio": { "height": 4, "width": 3 }, "bbox_slack": 5 }"#,
        )
        .unwrap();

        let args = parse(&[
            "cardfit",
            "normalize",
            "in",
            "out",
            "--config",
            path.to_str().unwrap(),
            "--slack",
            "0",
        ]);
        let config = args.resolve_config().unwrap();

        assert_eq!(config.target_ratio, AspectRatio::new(4, 3).unwrap());
        // Flag wins over the file
        assert_eq!(config.bbox_slack, 0);
        // Unset keys keep their defaults
        assert_eq!(config.trim_padding_fraction, 0.1);
        assert!(config.trim);
    }

    #[test]
    fn test_negative_padding_rejected() {
        let args = parse(&["cardfit", "normalize", "in", "out", "--padding=-0.5"]);
        assert!(matches!(
            args.resolve_config(),
            Err(AppError::Normalize(_))
        ));
    }
}
