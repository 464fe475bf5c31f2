use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use indicatif::{ProgressBar, ProgressStyle};
use laguerre_transform::report::{ReportWriter, TransformSummary};
use laguerre_transform::{
    ClampedTangent, Gaussian, LaguerreTransform, ParameterError, ShiftedSinePulse, Signal, TransformConfig,
    ZeroHandling,
};
use log::info;
use std::process;

fn main() {
    env_logger::init();

    let matches = cli().get_matches();

    let result = match matches.subcommand() {
        Some(("basis", sub_matches)) => load_engine(&matches).and_then(|e| handle_basis(&e, sub_matches)),
        Some(("horizon", sub_matches)) => load_engine(&matches).and_then(|e| handle_horizon(&e, sub_matches)),
        Some(("transform", sub_matches)) => {
            load_engine(&matches).and_then(|e| handle_transform(&e, sub_matches))
        }
        Some(("reconstruct", sub_matches)) => {
            load_engine(&matches).and_then(|e| handle_reconstruct(&e, sub_matches))
        }
        _ => {
            eprintln!("명령을 지정해주세요. --help를 참조하세요.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("오류: {:#}", e);
        process::exit(1);
    }
}

fn cli() -> Command {
    Command::new("Laguerre CLI")
        .version(env!("CARGO_PKG_VERSION"))
        .about("라게르 함수 기저 정/역변환 도구")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .global(true)
                .help("JSON 설정 파일"),
        )
        .arg(
            Arg::new("beta")
                .long("beta")
                .value_name("BETA")
                .global(true)
                .value_parser(value_parser!(f64))
                .help("기저 파라미터 β (설정 덮어쓰기)"),
        )
        .arg(
            Arg::new("sigma")
                .long("sigma")
                .value_name("SIGMA")
                .global(true)
                .value_parser(value_parser!(f64))
                .help("기저 파라미터 σ (설정 덮어쓰기)"),
        )
        .subcommand(
            Command::new("basis")
                .about("기저 함수 평가 및 표 작성")
                .arg(order_arg("2"))
                .arg(
                    Arg::new("t-max")
                        .long("t-max")
                        .value_name("T")
                        .value_parser(value_parser!(f64))
                        .default_value("10")
                        .help("표 작성 구간 [0, T)"),
                )
                .arg(
                    Arg::new("points")
                        .long("points")
                        .short('k')
                        .value_name("COUNT")
                        .value_parser(value_parser!(usize))
                        .help("표본 수 (기본: 설정값)"),
                )
                .arg(
                    Arg::new("at")
                        .long("at")
                        .value_name("T")
                        .value_parser(value_parser!(f64))
                        .help("한 점에서만 평가"),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("horizon")
                .about("기저 함수 지평 탐색")
                .arg(
                    Arg::new("t-max")
                        .long("t-max")
                        .value_name("T")
                        .value_parser(value_parser!(f64))
                        .help("탐색 구간 [0, T] (기본: 설정값)"),
                )
                .arg(
                    Arg::new("epsilon")
                        .long("epsilon")
                        .short('e')
                        .value_name("EPS")
                        .value_parser(value_parser!(f64))
                        .help("허용오차 (기본: 설정값)"),
                )
                .arg(
                    Arg::new("order")
                        .long("order")
                        .short('n')
                        .value_name("N")
                        .value_parser(value_parser!(usize))
                        .help("최대 차수 (기본: 설정값)"),
                )
                .arg(
                    Arg::new("full-trace")
                        .long("full-trace")
                        .action(ArgAction::SetTrue)
                        .help("단락 없이 모든 차수 기록"),
                ),
        )
        .subcommand(
            signal_args(Command::new("transform").about("신호의 라게르 계수 계산"))
                .arg(order_arg("20"))
                .arg(
                    Arg::new("parallel")
                        .long("parallel")
                        .action(ArgAction::SetTrue)
                        .help("차수별 병렬 계산"),
                )
                .arg(output_arg()),
        )
        .subcommand(
            signal_args(Command::new("reconstruct").about("계수열로 신호 재구성"))
                .arg(order_arg("20"))
                .arg(
                    Arg::new("t1")
                        .long("t1")
                        .value_name("T")
                        .value_parser(value_parser!(f64))
                        .allow_negative_numbers(true)
                        .default_value("0"),
                )
                .arg(
                    Arg::new("t2")
                        .long("t2")
                        .value_name("T")
                        .value_parser(value_parser!(f64))
                        .default_value("3.141592653589793"),
                )
                .arg(
                    Arg::new("size")
                        .long("size")
                        .value_name("COUNT")
                        .value_parser(value_parser!(usize))
                        .help("구간 수 (기본: 설정값)"),
                )
                .arg(
                    Arg::new("preserve-order")
                        .long("preserve-order")
                        .action(ArgAction::SetTrue)
                        .help("0 계수를 건너뛰되 차수 유지"),
                )
                .arg(
                    Arg::new("summary")
                        .long("summary")
                        .value_name("FILE")
                        .help("JSON 요약 저장"),
                )
                .arg(output_arg()),
        )
}

fn order_arg(default: &'static str) -> Arg {
    Arg::new("order")
        .long("order")
        .short('n')
        .value_name("N")
        .value_parser(value_parser!(usize))
        .default_value(default)
        .help("차수 (변환에서는 최대 차수)")
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .value_name("FILE")
        .help("구분자 텍스트로 저장")
}

fn signal_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("signal")
                .long("signal")
                .short('s')
                .value_parser(["pulse", "gauss", "tangent"])
                .default_value("pulse")
                .help("참조 신호"),
        )
        .arg(
            Arg::new("mean")
                .long("mean")
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .default_value("4")
                .help("가우시안 평균"),
        )
        .arg(
            Arg::new("spread")
                .long("spread")
                .value_parser(value_parser!(f64))
                .default_value("3")
                .help("가우시안 표준편차"),
        )
}

fn load_engine(matches: &ArgMatches) -> Result<LaguerreTransform> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => TransformConfig::from_json_file(path)?,
        None => TransformConfig::default(),
    };
    if let Some(&beta) = matches.get_one::<f64>("beta") {
        config.beta = beta;
    }
    if let Some(&sigma) = matches.get_one::<f64>("sigma") {
        config.sigma = sigma;
    }

    info!("설정: beta={}, sigma={}", config.beta, config.sigma);
    LaguerreTransform::from_config(config)
}

fn build_signal(matches: &ArgMatches) -> Result<(String, Box<dyn Signal + Sync>)> {
    let name = required::<String>(matches, "signal")?;
    let signal: Box<dyn Signal + Sync> = match name.as_str() {
        "pulse" => Box::new(ShiftedSinePulse),
        "tangent" => Box::new(ClampedTangent),
        "gauss" => {
            let mean = required::<f64>(matches, "mean")?;
            let spread = required::<f64>(matches, "spread")?;
            Box::new(Gaussian::new(mean, spread)?)
        }
        other => bail!("알 수 없는 신호: {}", other),
    };
    Ok((name, signal))
}

fn required<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> Result<T> {
    matches
        .get_one::<T>(id)
        .cloned()
        .with_context(|| format!("인자 누락: {}", id))
}

/// 표본/구간 수 인자. 지정하지 않으면 설정값, 0이면 거부
fn count_arg(matches: &ArgMatches, id: &'static str, default: usize) -> Result<usize> {
    let value = matches.get_one::<usize>(id).copied().unwrap_or(default);
    if value == 0 {
        return Err(ParameterError::InvalidGrid { name: id, value }.into());
    }
    Ok(value)
}

fn compute_coefficients(
    engine: &LaguerreTransform,
    signal: &(dyn Signal + Sync),
    order: usize,
    parallel: bool,
) -> Vec<f64> {
    if parallel {
        return engine.forward_sequence_parallel(signal, order);
    }

    let progress = ProgressBar::new(order as u64 + 1);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>3}/{len:3} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    let mut coefficients = Vec::with_capacity(order + 1);
    for n in 0..=order {
        progress.set_message(format!("{}차 계수", n));
        coefficients.push(engine.forward_coefficient(signal, n));
        progress.inc(1);
    }
    progress.finish_and_clear();
    coefficients
}

fn handle_basis(engine: &LaguerreTransform, matches: &ArgMatches) -> Result<()> {
    let order = required::<usize>(matches, "order")?;

    if let Some(&t) = matches.get_one::<f64>("at") {
        println!("l_{}({}) = {}", order, t, engine.basis().evaluate(t, order));
        return Ok(());
    }

    let t_max = required::<f64>(matches, "t-max")?;
    let points = count_arg(matches, "points", engine.config().tabulation_points)?;
    let table = engine.basis().tabulate(t_max, order, points);

    match matches.get_one::<String>("output") {
        Some(path) => {
            let mut writer = ReportWriter::create(path)?;
            writer.write_samples(&table)?;
            writer.finish()?;
            println!("{}개 표본 저장: {}", table.len(), path);
        }
        None => {
            for sample in &table {
                println!("t {} | l {}", sample.t, sample.value);
            }
        }
    }
    Ok(())
}

fn handle_horizon(engine: &LaguerreTransform, matches: &ArgMatches) -> Result<()> {
    let config = engine.config();
    let t_max = matches.get_one::<f64>("t-max").copied().unwrap_or(config.horizon_probe_t);
    let epsilon = matches.get_one::<f64>("epsilon").copied().unwrap_or(config.horizon_epsilon);
    let order = matches.get_one::<usize>("order").copied().unwrap_or(config.horizon_order);

    let result = if matches.get_flag("full-trace") {
        engine.basis().find_horizon_full_trace(t_max, epsilon, order)
    } else {
        engine.basis().find_horizon(t_max, epsilon, order)
    };

    match result.horizon {
        Some(horizon) => println!("지평: {}", horizon),
        None => println!("지평 없음 (적분 상한 +∞)"),
    }
    let evaluated: usize = result.trace.iter().map(|probe| probe.values.len()).sum();
    println!("격자점 {}개, 평가 {}회", result.trace.len(), evaluated);
    Ok(())
}

fn handle_transform(engine: &LaguerreTransform, matches: &ArgMatches) -> Result<()> {
    let (name, signal) = build_signal(matches)?;
    let order = required::<usize>(matches, "order")?;

    info!("정변환: signal={}, N={}", name, order);
    let coefficients = compute_coefficients(engine, signal.as_ref(), order, matches.get_flag("parallel"));

    match matches.get_one::<String>("output") {
        Some(path) => {
            let mut writer = ReportWriter::create(path)?;
            writer.write_values(&coefficients)?;
            writer.finish()?;
            println!("{}개 계수 저장: {}", coefficients.len(), path);
        }
        None => {
            for (n, value) in coefficients.iter().enumerate() {
                println!("c[{}] = {}", n, value);
            }
        }
    }
    Ok(())
}

fn handle_reconstruct(engine: &LaguerreTransform, matches: &ArgMatches) -> Result<()> {
    let (name, signal) = build_signal(matches)?;
    let order = required::<usize>(matches, "order")?;
    let t1 = required::<f64>(matches, "t1")?;
    let t2 = required::<f64>(matches, "t2")?;
    let size = count_arg(matches, "size", engine.config().inverse_tabulation_size)?;
    let zeros = if matches.get_flag("preserve-order") {
        ZeroHandling::PreserveOrder
    } else {
        ZeroHandling::Reindex
    };

    let coefficients = compute_coefficients(engine, signal.as_ref(), order, false);
    let values = engine.inverse_tabulate_with(&coefficients, t1, t2, size, zeros);
    let at_end = engine.inverse_with(&coefficients, t2, zeros);
    println!("재구성 f({}) = {} (원래 값 {})", t2, at_end, signal.value(t2));

    if let Some(path) = matches.get_one::<String>("output") {
        let mut writer = ReportWriter::create(path)?;
        writer.write_values(&values)?;
        writer.finish()?;
        println!("{}개 재구성 값 저장: {}", values.len(), path);
    }

    if let Some(path) = matches.get_one::<String>("summary") {
        let step = (t2 - t1) / size as f64;
        let summary = TransformSummary {
            signal: name,
            beta: engine.basis().beta(),
            sigma: engine.basis().sigma(),
            horizon: engine.probe_horizon().horizon,
            coefficients,
            reconstructions: values
                .iter()
                .enumerate()
                .map(|(i, &v)| (t1 + i as f64 * step, v))
                .collect(),
        };
        summary.save_json(path)?;
        println!("요약 저장: {}", path);
    }
    Ok(())
}
