// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use anyhow::Result;
use ats_core::{Context, OsEnv};
use ats_http_send_reqwest::ReqwestHttpSend;
use ats_top_sites::{Config, Credential, TopSitesClient, TopSitesQuery};
use clap::Parser;
use log::debug;
use std::ffi::OsString;
use std::process::ExitCode;

/// Process arguments expected, program name included.
const ARG_COUNT: usize = 6;

const USAGE: &str = "
Usage:
    ats access_key secret_key [country_code] [start_number] [count]
";

/// Query Alexa Top Sites with a SigV4 signed request.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(name = "ats", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Access key id.
    access_key: String,
    /// Secret access key.
    secret_key: String,
    /// Country code, e.g. `US`.
    country_code: String,
    /// Index of the first site.
    start_number: String,
    /// Number of sites to return.
    count: String,
}

/// Parse the process arguments, `None` means usage should be printed.
///
/// The count is checked before clap sees the arguments, every value is then
/// taken literally, `--` and `-x` included.
fn parse_args<I, T>(args: I) -> Option<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() != ARG_COUNT {
        debug!(
            "expected {} arguments, got {}",
            ARG_COUNT - 1,
            args.len().saturating_sub(1)
        );
        return None;
    }

    // Only positionals follow the escape.
    args.insert(1, OsString::from("--"));
    match Cli::try_parse_from(args) {
        Ok(cli) => Some(cli),
        Err(err) => {
            debug!("invalid arguments: {err}");
            None
        }
    }
}

async fn run(cli: Cli) -> Result<String> {
    let ctx = Context::new().with_env(OsEnv);
    let config = Config::default().from_env(&ctx)?;

    let client = reqwest::Client::builder().timeout(config.timeout).build()?;
    let ctx = ctx.with_http_send(ReqwestHttpSend::new(client));

    let client = TopSitesClient::new(
        ctx,
        config.into(),
        Credential::new(&cli.access_key, &cli.secret_key),
    );
    let query = TopSitesQuery::new(&cli.country_code, &cli.start_number, &cli.count);

    Ok(client.top_sites(&query).await?)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    // A wrong argument count is not treated as a failure.
    let Some(cli) = parse_args(std::env::args_os()) else {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    };

    match run(cli).await {
        Ok(body) => {
            print!("{body}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("Request Failed");
            println!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
