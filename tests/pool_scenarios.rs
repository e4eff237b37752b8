// tests/pool_scenarios.rs
// End-to-end scenarios: a match document goes in, pool figures and payouts come out.

mod pool_tests {
    use matchpool::pool::*;

    /// Test: the worked example from a full three-way pool
    #[test]
    fn test_three_way_pool_and_winner_payout() {
        let totals = BetTotals::new(30_000.0, 15_000.0, 5_000.0);
        let summary = compute_pools(&totals);

        assert_eq!(summary.total_pool, 50_000.0);
        assert_eq!(summary.house_cut, 7_500.0);
        assert_eq!(summary.prize_pool, 42_500.0);

        let payout = calculate_payout(3_000.0, totals.on(Outcome::A), summary.prize_pool);
        assert!((payout - 4_250.0).abs() < 1e-9, "got {payout}");
    }

    /// Test: every outcome's backers split the same prize pool in full
    #[test]
    fn test_each_outcome_distributes_whole_prize_pool() {
        let totals = BetTotals::new(1_234.0, 567.0, 89.0);
        let prize = compute_pools(&totals).prize_pool;

        for outcome in Outcome::all() {
            let total = totals.on(*outcome);
            let halves = calculate_payout(total / 2.0, total, prize) * 2.0;
            assert!((halves - prize).abs() < 1e-6, "{outcome:?}");
        }
    }

    /// Test: negative totals pass through the core untouched
    #[test]
    fn test_negative_totals_are_not_clamped() {
        let summary = compute_pools(&BetTotals::new(-100.0, 0.0, 0.0));
        assert_eq!(summary.total_pool, -100.0);
        assert_eq!(summary.house_cut, -15.0);
        assert_eq!(summary.prize_pool, -85.0);
    }
}

mod document_tests {
    use chrono::{TimeZone, Utc};
    use matchpool::cache::MemoryStore;
    use matchpool::sources::{load, DataSource};
    use matchpool::{MatchData, SourceError};

    fn defaults() -> MatchData {
        MatchData::defaults_at(Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap())
    }

    /// Test: a served document drives the board figures
    #[test]
    fn test_remote_document_to_prize_pool() {
        let doc = r#"{
            "teamA": "Lions", "teamB": "Tigers",
            "matchTime": "2026-10-18T19:45:00.000Z",
            "betsA": 30000, "betsB": 15000, "betsDraw": 5000,
            "logoA": "assets/lions.png", "logoB": "assets/tigers.png"
        }"#;
        let cache = MemoryStore::new();
        let res = futures::executor::block_on(load(
            defaults(),
            None,
            || async { Ok::<_, SourceError>(Some(doc.to_string())) },
            &cache,
        ));

        assert_eq!(res.source, DataSource::Remote);
        assert_eq!(res.data.summary().prize_pool, 42_500.0);
        assert_eq!(res.data.logo_draw, "assets/balance.png");
        assert!(!cache.is_empty());
    }

    /// Test: a document with only one bet field counts the rest as zero
    #[test]
    fn test_sparse_document() {
        let cache = MemoryStore::new();
        let res = futures::executor::block_on(load(
            defaults(),
            Some(r#"{"betsB": 10}"#),
            || async { Ok::<_, SourceError>(None) },
            &cache,
        ));

        assert_eq!(res.source, DataSource::Embedded);
        assert_eq!(res.data.summary().total_pool, 10.0);
        assert_eq!(res.data.team_a, "Team A");
    }
}
