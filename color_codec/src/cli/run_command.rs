// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::BTreeMap, fmt::Display};

use miette::IntoDiagnostic;
use serde::Serialize;

use crate::{ChannelValueKind, Color, ColorCodec, CommonResult,
            cli::{CLIArg, CLICommand},
            from_standard_rgba, named_colors, random_color, to_delimited_string};

/// What the `channels --json` subcommand prints. Channel keys are the kebab-case
/// names of [`ChannelValueKind`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    pub delimited: String,
    pub hex: String,
    pub channels: BTreeMap<String, f64>,
}

impl From<&Color> for ColorReport {
    fn from(color: &Color) -> Self {
        Self {
            delimited: to_delimited_string(color),
            hex: color.to_hex_string(),
            channels: ChannelValueKind::computed()
                .map(|kind| (kind.to_string(), color.channel_value(kind)))
                .collect(),
        }
    }
}

impl Display for ColorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "delimited: {}\nhex: {}", self.delimited, self.hex)
    }
}

/// Runs the subcommand in `cli_arg` and returns what should be printed to stdout.
///
/// # Errors
///
/// Returns an error if the input can't be parsed as a color, using the codec
/// configured by the global options.
pub fn try_run_command(cli_arg: &CLIArg) -> CommonResult<String> {
    let codec = ColorCodec::new(cli_arg.global_options.codec_config());

    match &cli_arg.command {
        CLICommand::Parse { input } => {
            let color = codec.parse_color(input)?;
            Ok(ColorReport::from(&color).to_string())
        }
        CLICommand::Hex { input } => {
            let color = codec.from_hex(input)?;
            Ok(ColorReport::from(&color).to_string())
        }
        CLICommand::Standard {
            red,
            green,
            blue,
            alpha,
        } => {
            let color = from_standard_rgba(*red, *green, *blue, *alpha);
            Ok(ColorReport::from(&color).to_string())
        }
        CLICommand::Random { count } => Ok((0..*count)
            .map(|_| to_delimited_string(&random_color()))
            .collect::<Vec<_>>()
            .join("\n")),
        CLICommand::Channels { input, kind, json } => {
            let color = codec.parse_color(input)?;
            try_format_channels(&color, *kind, *json)
        }
        CLICommand::Names => Ok(named_colors()
            .map(|(name, color)| {
                format!(
                    "{name}: {} ({})",
                    to_delimited_string(&color),
                    color.to_hex_string()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn try_format_channels(
    color: &Color,
    maybe_kind: Option<ChannelValueKind>,
    json: bool,
) -> CommonResult<String> {
    if json {
        return serde_json::to_string_pretty(&ColorReport::from(color)).into_diagnostic();
    }

    Ok(match maybe_kind {
        Some(kind) => color.channel_value(kind).to_string(),
        None => ChannelValueKind::computed()
            .map(|kind| format!("{kind}: {}", color.channel_value(kind)))
            .collect::<Vec<_>>()
            .join("\n"),
    })
}
