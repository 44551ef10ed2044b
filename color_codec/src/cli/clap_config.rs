// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, Subcommand};

use crate::{ChannelValueKind, CodecConfig, HexParseMode, OutOfRangePolicy, TracingConfig};

/// More info: <https://docs.rs/clap/latest/clap/_derive/#overview>
#[derive(Debug, Parser)]
#[command(bin_name = "color_codec")]
#[command(about = "🎨 Convert colors between delimited, named, and hex forms")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `color_codec_log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        default_value_t = tracing::Level::DEBUG,
        help = "Log level used when logging is enabled"
    )]
    pub log_level: tracing::Level,

    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = OutOfRangePolicy::PassThrough,
        help = "What to do with parsed channel values outside of 0.0 ..= 1.0"
    )]
    pub out_of_range: OutOfRangePolicy,

    #[arg(
        global = true,
        long,
        short = 's',
        help = "Only accept hex input of the form `#RRGGBB` or `RRGGBB`"
    )]
    pub strict_hex: bool,
}

impl GlobalOption {
    #[must_use]
    pub fn codec_config(&self) -> CodecConfig {
        let hex_mode = if self.strict_hex {
            HexParseMode::Strict
        } else {
            HexParseMode::Lenient
        };
        CodecConfig::from(self.out_of_range) + hex_mode.into()
    }

    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig { self.log_level.into() }
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "🔤 Parse a named color or `red||green||blue||alpha`\n💡 Eg: `color_codec parse 'Pink'`")]
    Parse { input: String },

    #[clap(about = "#️⃣ Parse a hex color\n💡 Eg: `color_codec hex '#ff8000'`")]
    Hex { input: String },

    #[clap(about = "🔢 Build a color from standard 0-255 channel values, missing ones are 255\n💡 Eg: `color_codec standard 255 128 0`")]
    Standard {
        #[arg(default_value_t = 255)]
        red: u8,
        #[arg(default_value_t = 255)]
        green: u8,
        #[arg(default_value_t = 255)]
        blue: u8,
        #[arg(default_value_t = 255)]
        alpha: u8,
    },

    #[clap(about = "🎲 Generate random opaque colors")]
    Random {
        #[arg(long, short = 'c', default_value_t = 1, help = "How many colors to generate")]
        count: usize,
    },

    #[clap(about = "📊 Show the channel readings of a color (named or delimited)")]
    Channels {
        input: String,

        #[arg(long, short = 'k', value_enum, help = "Only show this reading")]
        kind: Option<ChannelValueKind>,

        #[arg(long, help = "Print the color and all its readings as JSON")]
        json: bool,
    },

    #[clap(about = "📜 List the named colors")]
    Names,
}
