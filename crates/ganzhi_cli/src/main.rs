mod logging;

use std::io::Read;

use clap::{Parser, Subcommand};
use ganzhi_base::{
    ApproximateSolarTerms, EarthlyBranch, HeavenlyStem, Pillar, day_pillar,
    hour_branch, hour_pillar, month_pillar, terms_in_year, year_pillar,
};
use ganzhi_rs::{
    BaziChart, ChartConfig, ChartReport, CivilDateTime, DayunConfig, DayunSequence, EngineConfig,
    GanzhiError, LuckReport, RangePolicy, YearBoundary, ZiHourRule, active_dayun,
    analyze_json_with, chart_at, luck_with, parse_checked,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "ganzhi", about = "Sexagenary (Ganzhi) calendar and BaZi chart CLI")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Earliest supported year
    #[arg(long, global = true, default_value_t = ganzhi_rs::DEFAULT_MIN_YEAR)]
    min_year: i32,

    /// Latest supported year
    #[arg(long, global = true, default_value_t = ganzhi_rs::DEFAULT_MAX_YEAR)]
    max_year: i32,

    /// Warn instead of failing on years outside the supported range
    #[arg(long, global = true)]
    no_range_check: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars for a civil date-time
    Chart {
        /// Local date-time (YYYY-MM-DDThh:mm[:ss])
        datetime: String,
        /// Change the year at Lichun instead of January
        #[arg(long)]
        start_of_spring: bool,
        /// Assign 23:00-23:59 to the next day's pillar
        #[arg(long)]
        zi_next_day: bool,
        /// Print the JSON report
        #[arg(long)]
        json: bool,
    },
    /// Decade luck (Dayun) sequence
    Dayun {
        /// Birth local date-time (YYYY-MM-DDThh:mm[:ss])
        datetime: String,
        /// male or female
        #[arg(long)]
        gender: String,
        /// Number of ten-year periods
        #[arg(long, default_value_t = ganzhi_base::DEFAULT_DAYUN_PERIODS)]
        periods: u8,
        /// Mark the period active in this calendar year
        #[arg(long)]
        year: Option<i32>,
        /// Print the JSON report
        #[arg(long)]
        json: bool,
    },
    /// Year pillar from civil year and month
    YearPillar {
        year: i32,
        /// Month 1-12 (January belongs to the previous year)
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
    },
    /// Month pillar for a date
    MonthPillar {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Day pillar for a date
    DayPillar {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Hour pillar for a date and hour
    HourPillar {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Hour 0-23
        #[arg(value_parser = clap::value_parser!(u32).range(0..=23))]
        hour: u32,
    },
    /// Double-hour branch for an hour
    HourBranch {
        /// Hour 0-23
        #[arg(value_parser = clap::value_parser!(u32).range(0..=23))]
        hour: u32,
    },
    /// Heavenly stem for an index (reduced mod 10)
    Stem {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Earthly branch for an index (reduced mod 12)
    Branch {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// 60-cycle lookup: an index (reduced mod 60) or a pillar such as 甲子
    Cycle {
        #[arg(allow_negative_numbers = true)]
        value: String,
    },
    /// Approximate sectional-term boundaries for a year
    SolarTerms { year: i32 },
    /// JSON analysis request to JSON response; reads stdin when omitted
    AnalyzeJson { json: Option<String> },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), GanzhiError> {
    let range = RangePolicy {
        min_year: cli.min_year,
        max_year: cli.max_year,
        enforce: !cli.no_range_check,
    };
    let mut config = EngineConfig {
        range,
        ..EngineConfig::default()
    };

    match cli.command {
        Commands::Chart {
            datetime,
            start_of_spring,
            zi_next_day,
            json,
        } => {
            config.chart = ChartConfig {
                year_boundary: if start_of_spring {
                    YearBoundary::StartOfSpring
                } else {
                    YearBoundary::January
                },
                zi_hour: if zi_next_day {
                    ZiHourRule::NextDay
                } else {
                    ZiHourRule::SameDay
                },
            };
            let dt: CivilDateTime = datetime.parse()?;
            let chart = chart_at(dt, &config)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ChartReport::from(&chart))?
                );
            } else {
                print_chart(&chart);
            }
        }

        Commands::Dayun {
            datetime,
            gender,
            periods,
            year,
            json,
        } => {
            config.dayun = DayunConfig { periods };
            let seq = luck_with(&datetime, &gender, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&LuckReport::from(&seq))?);
            } else {
                print_dayun(&seq, year);
            }
        }

        Commands::YearPillar { year, month } => {
            config.range.check_year(year)?;
            let p = year_pillar(year, month);
            println!("{} ({})", describe(&p), p.branch().zodiac().english_name());
        }

        Commands::MonthPillar { date } => {
            let dt = parse_checked(&date, &config.range)?;
            println!("{}", describe(&month_pillar(dt.naive().date())));
        }

        Commands::DayPillar { date } => {
            let dt = parse_checked(&date, &config.range)?;
            println!("{}", describe(&day_pillar(dt.naive().date())));
        }

        Commands::HourPillar { date, hour } => {
            let dt = parse_checked(&date, &config.range)?;
            println!("{}", describe(&hour_pillar(dt.naive().date(), hour)));
        }

        Commands::HourBranch { hour } => {
            let b = hour_branch(hour);
            let (from, to) = b.hour_window();
            println!(
                "{} ({}) {:02}:00-{:02}:59",
                b.name(),
                b.pinyin(),
                from,
                (to + 23) % 24
            );
        }

        Commands::Stem { index } => {
            let s = HeavenlyStem::from_index(index);
            println!(
                "{} ({}) index {} - {} {}",
                s.name(),
                s.pinyin(),
                s.index(),
                s.polarity().name(),
                s.element().name()
            );
        }

        Commands::Branch { index } => {
            let b = EarthlyBranch::from_index(index);
            println!(
                "{} ({}) index {} - {} {} {}",
                b.name(),
                b.pinyin(),
                b.index(),
                b.polarity().name(),
                b.element().name(),
                b.zodiac().name()
            );
        }

        Commands::Cycle { value } => {
            let p = match value.parse::<i64>() {
                Ok(n) => Pillar::from_cycle_index(n),
                Err(_) => Pillar::from_chars(&value)?,
            };
            println!("{} index {}", describe(&p), p.cycle_index());
        }

        Commands::SolarTerms { year } => {
            for (term, start) in terms_in_year(year, &ApproximateSolarTerms) {
                println!(
                    "{}  {:<10} {}  opens {} month",
                    term.name(),
                    term.pinyin(),
                    start.date(),
                    term.month_branch().name()
                );
            }
        }

        Commands::AnalyzeJson { json } => {
            let input = match json {
                Some(s) => s,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .map_err(|e| GanzhiError::InvalidRequest(e.to_string()))?;
                    buf
                }
            };
            debug!(bytes = input.len(), "analysis request");
            println!("{}", analyze_json_with(&input, &config)?);
        }
    }

    Ok(())
}

/// `甲子 (Jia Zi)`.
fn describe(p: &Pillar) -> String {
    format!("{} ({} {})", p, p.stem().pinyin(), p.branch().pinyin())
}

fn print_chart(chart: &BaziChart) {
    println!("Date:   {}", chart.datetime.format("%Y-%m-%d %H:%M"));
    println!(
        "Year:   {}  {} {}",
        describe(&chart.year),
        chart.zodiac().name(),
        chart.zodiac().english_name()
    );
    println!("Month:  {}", describe(&chart.month));
    println!("Day:    {}", describe(&chart.day));
    println!("Hour:   {}", describe(&chart.hour));
    let counts: Vec<String> = chart
        .elements
        .iter()
        .map(|(e, n)| format!("{}{}", e.name(), n))
        .collect();
    println!("Elements: {}", counts.join(" "));
    let missing = chart.elements.missing();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|e| e.english_name()).collect();
        println!("Missing:  {}", names.join(", "));
    }
}

fn print_dayun(seq: &DayunSequence, year: Option<i32>) {
    println!(
        "Direction: {}, start age {:.1} (from {})",
        seq.direction.name(),
        seq.start_age,
        seq.start_year
    );
    let active = year.and_then(|y| active_dayun(seq, y)).map(|p| p.index);
    for p in &seq.periods {
        let mark = if active == Some(p.index) { '*' } else { ' ' };
        println!(
            "{mark}{:>2}  {}  {}-{}  age {:.1}-{:.1}",
            p.index, p.pillar, p.start_year, p.end_year, p.start_age, p.end_age
        );
    }
    if let (Some(y), None) = (year, active) {
        println!("No period active in {y}");
    }
}
