// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Command line front end for [`r3bl_color_codec`]. Run `color_codec --help` to see
//! the subcommands.

use clap::Parser;
use r3bl_color_codec::{CommonResult,
                       cli::{CLIArg, try_run_command},
                       try_initialize_logging_global};

fn main() -> CommonResult<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        try_initialize_logging_global(cli_arg.global_options.tracing_config())?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let res = try_run_command(&cli_arg);

    if enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    match res {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        // Handle unrecoverable / unknown errors here.
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not run color_codec due to the following problem",
                error = ?error
            );
            Err(error)
        }
    }
}
