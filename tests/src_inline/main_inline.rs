use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn test_parse_simulate_defaults() {
    let cli = parse(&[
        "pitchsim", "simulate", "--startup", "TechFlow", "--persona", "vc", "--answers",
        "answers.txt", "--out", "out",
    ]);
    let Command::Simulate(args) = cli.command else {
        panic!("expected simulate");
    };
    assert_eq!(args.startup, "TechFlow");
    assert_eq!(args.seed, 0);
    assert_eq!(args.end_after, None);
    assert!(!args.realtime && !args.instant);
    assert!(args.history.is_none());
    assert!(args.catalog.personas.is_none());
}

#[test]
fn test_realtime_conflicts_with_instant() {
    let res = Cli::try_parse_from([
        "pitchsim", "simulate", "--startup", "X", "--persona", "vc", "--answers", "a", "--out",
        "o", "--realtime", "--instant",
    ]);
    assert!(res.is_err());
}

#[test]
fn test_parse_export_defaults() {
    let cli = parse(&["pitchsim", "export", "--startup", "TechFlow"]);
    let Command::Export(args) = cli.command else {
        panic!("expected export");
    };
    assert_eq!(args.out, PathBuf::from("pitch-sessions.csv"));
    assert_eq!(args.startup.as_deref(), Some("TechFlow"));
    assert!(args.judge.is_none());
    assert!(!args.stdout);
}

#[test]
fn test_global_verbosity_flags() {
    let cli = parse(&["pitchsim", "-vv", "prompt", "--persona", "angel", "--turn", "9"]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(logging::default_level(cli.verbose, cli.quiet), "trace");
    let Command::Prompt(args) = cli.command else {
        panic!("expected prompt");
    };
    assert_eq!(args.turn, 9);
    assert_eq!(logging::default_level(0, true), "warn");
    assert_eq!(logging::default_level(0, false), "info");
}

#[test]
fn test_run_export_writes_csv() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("sessions.csv");
    run_export(&ExportArgs {
        history: None,
        startup: None,
        judge: Some("Venture Capitalist".to_string()),
        out: out.clone(),
        stdout: false,
    })
    .unwrap();
    let csv = std::fs::read_to_string(&out).unwrap();
    assert_eq!(csv.lines().count(), 3);
}

#[test]
fn test_run_simulate_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let answers = dir.path().join("answers.txt");
    std::fs::write(
        &answers,
        "We help clinics cut no-shows and grow revenue.\nOur team ran scheduling at a large hospital.\nThe market is 40k clinics in the US.\n",
    )
    .unwrap();
    let out = dir.path().join("out");
    let history = dir.path().join("history.json");
    run_simulate(&SimulateArgs {
        startup: "TechFlow".to_string(),
        persona: "vc".to_string(),
        answers,
        out: out.clone(),
        end_after: None,
        seed: 1,
        realtime: false,
        instant: true,
        history: Some(history.clone()),
        catalog: CatalogArgs { personas: None },
    })
    .unwrap();
    assert!(out.join("transcript.json").exists());
    assert!(out.join("results.json").exists());
    assert!(out.join("report.txt").exists());
    let records = load_history(&history).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].judge_type, "Venture Capitalist");
    // 60 + 2 * 3 (market, revenue, team)
    assert_eq!(records[0].score, 66);
}

#[test]
fn test_run_simulate_rejects_single_answer() {
    let dir = tempfile::tempdir().unwrap();
    let answers = dir.path().join("answers.txt");
    std::fs::write(&answers, "Just one answer.\n").unwrap();
    let err = run_simulate(&SimulateArgs {
        startup: "TechFlow".to_string(),
        persona: "vc".to_string(),
        answers,
        out: dir.path().join("out"),
        end_after: None,
        seed: 1,
        realtime: false,
        instant: true,
        history: None,
        catalog: CatalogArgs { personas: None },
    })
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Session(SessionError::TooFewAnswers { answered: 1, .. })
    ));
}
