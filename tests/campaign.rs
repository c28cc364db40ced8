use skip_the_line::{
    render_waits, run_campaign, CampaignConfig, CsvDayLog, NoopDayLog, RandomSource, Rounding,
    PRIVILEGE_TICKET_PRICE,
};

fn config(days: u32, arrival_mean: f64, service_mean: f64) -> CampaignConfig {
    CampaignConfig {
        days,
        arrival_mean,
        service_mean,
    }
}

/// Given a fixed seed and the same parameters
/// When we run the campaign twice
/// Then the summaries, the rounded output and the day log are bit-identical
#[test]
fn fixed_seed_runs_are_identical() {
    let run = || {
        let mut source = RandomSource::new(Some(42));
        let mut log = CsvDayLog::new(Vec::new()).unwrap();
        let summary = run_campaign(&config(50, 5.0, 2.0), &mut source, &mut log).unwrap();
        (summary, log.into_inner())
    };

    let (summary1, log1) = run();
    let (summary2, log2) = run();

    assert_eq!(summary1, summary2);
    assert_eq!(
        render_waits(&summary1, Rounding::Nearest),
        render_waits(&summary2, Rounding::Nearest)
    );
    assert_eq!(log1, log2);
}

#[test]
fn day_log_has_header_and_one_row_per_day() {
    let days = 25;

    let mut source = RandomSource::new(Some(7));
    let mut log = CsvDayLog::new(Vec::new()).unwrap();
    run_campaign(&config(days, 5.0, 2.0), &mut source, &mut log).unwrap();

    let text = String::from_utf8(log.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[0],
        "Day, Profit, AvgWaitAll, AvgWaitPrivilege, AvgWaitRegular"
    );
    assert_eq!(lines.len() as u32, days + 1);

    for (i, line) in lines[1..].iter().enumerate() {
        let fields: Vec<&str> = line.split(", ").collect();
        assert_eq!(fields.len(), 5, "Malformed row: {line:?}");
        assert_eq!(fields[0].parse::<u32>().unwrap(), i as u32 + 1);

        let profit: u64 = fields[1].parse().unwrap();
        assert_eq!(profit % PRIVILEGE_TICKET_PRICE, 0);

        for wait in &fields[2..] {
            let (_, decimals) = wait.split_once('.').expect("wait column has decimals");
            assert_eq!(decimals.len(), 2, "Wait not to two decimals: {wait:?}");
        }
    }
}

/// With a mean service time well below the mean inter-arrival gap the
/// office keeps up and waits stay short; pushing the service mean past the
/// gap saturates the server and waits blow up.
#[test]
fn congestion_drives_average_waits_up() {
    let average_wait = |service_mean: f64| {
        let mut source = RandomSource::new(Some(42));
        let summary = run_campaign(&config(100, 5.0, service_mean), &mut source, &mut NoopDayLog)
            .unwrap();
        summary.avg_wait_all
    };

    let uncongested = average_wait(2.0);
    let saturated = average_wait(6.0);

    assert!(
        uncongested < 10.0,
        "a=5, s=2 should keep average waits short, got {uncongested:.2}"
    );
    assert!(
        uncongested < saturated,
        "Saturation should raise waits: {uncongested:.2} vs {saturated:.2}"
    );
}

#[test]
fn near_instant_service_yields_zero_output() {
    let mut source = RandomSource::new(Some(42));
    let summary =
        run_campaign(&config(1, 5.0, 0.0001), &mut source, &mut NoopDayLog).unwrap();

    assert_eq!(summary.total_profit, 0);
    assert_eq!(render_waits(&summary, Rounding::Nearest), [0, 0, 0]);
    assert_eq!(render_waits(&summary, Rounding::NearestTen), [0, 0, 0]);
}

#[test]
fn rounding_variants_agree_up_to_ten_minutes() {
    let mut source = RandomSource::new(Some(11));
    let summary =
        run_campaign(&config(30, 5.0, 4.0), &mut source, &mut NoopDayLog).unwrap();

    let nearest = render_waits(&summary, Rounding::Nearest);
    let tens = render_waits(&summary, Rounding::NearestTen);

    for (a, b) in nearest.iter().zip(tens.iter()) {
        assert_eq!(b % 10, 0);
        assert!(
            (a - b).abs() <= 5,
            "Rounding modes should agree within 5 minutes: {a} vs {b}"
        );
    }
}
