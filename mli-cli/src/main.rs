/*
 *  Copyright (C) 2025 Michael Bachmann
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU Affero General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU Affero General Public License for more details.
 *
 *  You should have received a copy of the GNU Affero General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use clap::{Parser, Subcommand};
use miette::Result;
use mli_cli::{
    config::{Config, OutputFormat},
    decode_hex, encode_length, logging, render_mli, render_types, type_infos, wrap,
};
use mli_codec::{MliLength, MliType};
use std::io;

#[derive(Parser)]
#[command(author, version, about = "Encode and decode Message Length Indicators.", long_about = None)]
struct Args {
    /// Output format. When omitted, the value of the env var MLI_OUTPUT will be used. If that is not set, plain text will be used.
    #[arg(short, long, global = true)]
    output: Option<OutputFormat>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a message length and print the MLI as hex.
    Encode {
        /// The MLI type. When omitted, the value of the env var MLI_TYPE will be used. If that is not set, 2I will be used.
        #[arg(short = 't', long = "type")]
        mli_type: Option<MliType>,
        /// The length of the message, excluding the MLI.
        length: MliLength,
    },
    /// Decode a hex encoded MLI and print the message length.
    Decode {
        /// The MLI type. When omitted, the value of the env var MLI_TYPE will be used. If that is not set, 2I will be used.
        #[arg(short = 't', long = "type")]
        mli_type: Option<MliType>,
        /// The MLI bytes as hex, e.g. 002d.
        mli: String,
    },
    /// Read a message from stdin and write it to stdout, preceded by its MLI.
    Wrap {
        /// The MLI type. When omitted, the value of the env var MLI_TYPE will be used. If that is not set, 2I will be used.
        #[arg(short = 't', long = "type")]
        mli_type: Option<MliType>,
    },
    /// List all supported MLI types.
    Types,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init();
    let config = Config::new()?;
    let args: Args = Args::parse();

    let output = args.output.unwrap_or(config.output);

    match args.command {
        Command::Encode { mli_type, length } => {
            let mli = encode_length(mli_type.unwrap_or(config.mli_type), length)?;
            println!("{}", render_mli(&mli, output, false)?);
        }
        Command::Decode { mli_type, mli } => {
            let mli = decode_hex(mli_type.unwrap_or(config.mli_type), &mli)?;
            println!("{}", render_mli(&mli, output, true)?);
        }
        Command::Wrap { mli_type } => {
            wrap(
                mli_type.unwrap_or(config.mli_type),
                io::stdin().lock(),
                io::stdout().lock(),
            )?;
        }
        Command::Types => {
            let types = type_infos();
            println!("{}", render_types(&types, output)?);
        }
    }

    Ok(())
}
