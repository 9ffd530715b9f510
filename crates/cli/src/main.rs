use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use hullcross::gen::{draw_cases, CloudCfg, PointCount, ScenarioCfg};
use hullcross::search::{
    format_outcome, solve_all, solve_case, solve_exhaustive, Case, Crossing, Direction, SearchCfg,
};
use serde::Serialize;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Find a segment of one point set that crosses the other set's convex hull")]
struct Cmd {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace); logs go to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve every case of an input file (stdin by default), one line per case
    Solve {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Skip the containment fallback
        #[arg(long)]
        no_fallback: bool,
        /// Emit a JSON array of per-case records instead of plain lines
        #[arg(long)]
        json: bool,
        /// Write output here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Compare the heuristic against the exhaustive baseline and verify results
    Check {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Write a reproducible random input file
    Gen {
        #[arg(long, default_value_t = 10)]
        cases: usize,
        /// Points in P
        #[arg(long, default_value_t = 100)]
        p: usize,
        /// Points in R
        #[arg(long, default_value_t = 100)]
        r: usize,
        #[arg(long, default_value_t = 1_000)]
        radius: i64,
        /// Inner radius fraction in [0, 1]; 0 draws disks, close to 1 draws rings
        #[arg(long, default_value_t = 0.0)]
        inner: f64,
        /// Center of R relative to P, as DX,DY
        #[arg(long, default_value = "500,0", value_parser = parse_offset)]
        offset: (i64, i64),
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    init_logging(cmd.verbose);
    match cmd.action {
        Action::Solve {
            input,
            seed,
            no_fallback,
            json,
            out,
        } => {
            let cfg = SearchCfg {
                seed,
                fallback: !no_fallback,
                ..SearchCfg::default()
            };
            solve(input, cfg, json, out)
        }
        Action::Check { input, seed } => check(input, seed),
        Action::Gen {
            cases,
            p,
            r,
            radius,
            inner,
            offset,
            seed,
            out,
        } => {
            let cloud = |count: usize, center: (i64, i64)| CloudCfg {
                count: PointCount::Fixed(count),
                center,
                radius,
                inner_frac: inner,
            };
            let scenario = ScenarioCfg {
                p: cloud(p, (0, 0)),
                r: cloud(r, offset),
            };
            gen(scenario, cases, seed, out)
        }
        Action::Report => report(),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_offset(s: &str) -> Result<(i64, i64), String> {
    let (dx, dy) = s
        .split_once(',')
        .ok_or_else(|| format!("expected DX,DY, got {s:?}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<i64>()
            .map_err(|e| format!("invalid offset component {v:?}: {e}"))
    };
    Ok((parse(dx)?, parse(dy)?))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

/// Write to `out` (creating parent dirs) or to stdout.
fn emit(text: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct CaseRecord {
    case: usize,
    /// `[a, b, e1, e2]`, absent when nothing was found
    ids: Option<[usize; 4]>,
    direction: Option<&'static str>,
    stage: Option<String>,
    line: String,
}

impl CaseRecord {
    fn new(case: usize, res: Option<&Crossing>) -> Self {
        Self {
            case,
            ids: res.map(Crossing::ids),
            direction: res.map(|c| match c.direction {
                Direction::PToR => "p_to_r",
                Direction::RToP => "r_to_p",
            }),
            stage: res.map(|c| format!("{:?}", c.stage).to_lowercase()),
            line: format_outcome(res),
        }
    }
}

/// Solve all cases in `text` and render the output.
fn render_solutions(text: &str, cfg: &SearchCfg, json: bool) -> Result<(usize, String)> {
    let cases = input::parse_cases(text)?;
    let results = solve_all(&cases, cfg);
    let rendered = if json {
        let records: Vec<CaseRecord> = results
            .iter()
            .enumerate()
            .map(|(i, res)| CaseRecord::new(i + 1, res.as_ref()))
            .collect();
        let mut s = serde_json::to_string_pretty(&records)?;
        s.push('\n');
        s
    } else {
        results
            .iter()
            .map(|res| format_outcome(res.as_ref()) + "\n")
            .collect()
    };
    Ok((cases.len(), rendered))
}

fn solve(input: Option<PathBuf>, cfg: SearchCfg, json: bool, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(input = ?input, seed = cfg.seed, fallback = cfg.fallback, json, "solve");
    let text = read_input(input.as_deref())?;
    let (count, rendered) = render_solutions(&text, &cfg, json)?;
    tracing::info!(cases = count, "solved");
    emit(&rendered, out.as_deref())?;
    if let Some(path) = out {
        let payload = provenance::Payload::new(
            "solve",
            serde_json::json!({
                "input": input,
                "seed": cfg.seed,
                "fallback": cfg.fallback,
                "json": json,
                "cases": count
            }),
        );
        provenance::write_sidecar(&path, payload)?;
    }
    Ok(())
}

/// Per-run tally of heuristic vs. baseline.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
struct CheckSummary {
    cases: usize,
    found: usize,
    baseline_found: usize,
    missed: usize,
    invalid: usize,
}

fn check_cases(cases: &[Case], cfg: &SearchCfg) -> CheckSummary {
    let mut sum = CheckSummary {
        cases: cases.len(),
        ..CheckSummary::default()
    };
    for (i, case) in cases.iter().enumerate() {
        let fast = solve_case(case, cfg, i as u64);
        let full = solve_exhaustive(case);
        if full.is_some() {
            sum.baseline_found += 1;
        }
        match (&fast, &full) {
            (Some(c), _) => {
                sum.found += 1;
                if !c.verify(case) {
                    sum.invalid += 1;
                    tracing::error!(case = i + 1, ids = %c, "reported crossing fails verification");
                }
            }
            (None, Some(c)) => {
                sum.missed += 1;
                tracing::warn!(case = i + 1, baseline = %c, "heuristic missed a crossing");
            }
            (None, None) => {}
        }
    }
    sum
}

fn check(input: Option<PathBuf>, seed: u64) -> Result<()> {
    tracing::info!(input = ?input, seed, "check");
    let text = read_input(input.as_deref())?;
    let cases = input::parse_cases(&text)?;
    let cfg = SearchCfg {
        seed,
        ..SearchCfg::default()
    };
    let sum = check_cases(&cases, &cfg);
    println!("{}", serde_json::to_string(&sum)?);
    if sum.invalid > 0 {
        bail!("{} of {} reported crossings failed verification", sum.invalid, sum.found);
    }
    Ok(())
}

fn gen(scenario: ScenarioCfg, count: usize, seed: u64, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(count, seed, out = ?out, "gen");
    let cases = draw_cases(&scenario, seed, count);
    emit(&input::write_cases(&cases), out.as_deref())?;
    if let Some(path) = out {
        let payload = provenance::Payload::new(
            "gen",
            serde_json::json!({
                "cases": count,
                "seed": seed,
                "p": format!("{:?}", scenario.p),
                "r": format!("{:?}", scenario.r)
            }),
        );
        provenance::write_sidecar(&path, payload)?;
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": hullcross::VERSION,
        "params": SearchCfgReport::from(SearchCfg::default()),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[derive(Serialize)]
struct SearchCfgReport {
    near: usize,
    antipodal_band: usize,
    random: usize,
    fallback: bool,
}

impl From<SearchCfg> for SearchCfgReport {
    fn from(c: SearchCfg) -> Self {
        Self {
            near: c.near,
            antipodal_band: c.antipodal_band,
            random: c.random,
            fallback: c.fallback,
        }
    }
}
