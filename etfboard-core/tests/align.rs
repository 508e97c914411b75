use chrono::NaiveDate;
use etfboard_core::{Etf, Quote, align};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).expect("valid date")
}

fn quote(d: u32, px: f64) -> Quote {
    Quote {
        date: day(d),
        open: Some(px),
        high: Some(px + 1.0),
        low: Some(px - 1.0),
        close: Some(px),
        volume: Some(1_000),
        adj_close: Some(px),
    }
}

/// Full coverage over `days` for every tracked symbol.
fn full_series(days: &[u32]) -> Vec<(Etf, Vec<Quote>)> {
    Etf::ALL
        .iter()
        .map(|&etf| (etf, days.iter().map(|&d| quote(d, 100.0)).collect()))
        .collect()
}

fn replace(series: &mut [(Etf, Vec<Quote>)], etf: Etf, quotes: Vec<Quote>) {
    series
        .iter_mut()
        .find(|(e, _)| *e == etf)
        .expect("symbol present")
        .1 = quotes;
}

#[test]
fn strict_inner_join_keeps_only_shared_dates() {
    let mut series = full_series(&[1, 2, 3, 4]);
    replace(&mut series, Etf::Spy, vec![quote(1, 1.0), quote(2, 1.0), quote(3, 1.0)]);
    replace(&mut series, Etf::Jnk, vec![quote(2, 1.0), quote(3, 1.0), quote(4, 1.0)]);

    let rows = align(&series);
    let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![day(2), day(3)]);
}

#[test]
fn date_missing_for_one_symbol_is_excluded() {
    let mut series = full_series(&[1, 2, 3]);
    replace(&mut series, Etf::Tlt, vec![quote(1, 95.0), quote(3, 95.0)]);

    let rows = align(&series);
    let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![day(1), day(3)]);
}

#[test]
fn symbol_with_no_quotes_empties_the_output() {
    let mut series = full_series(&[1, 2]);
    replace(&mut series, Etf::Mdy, Vec::new());
    assert!(align(&series).is_empty());
}

#[test]
fn absent_adj_close_drops_the_date() {
    let mut series = full_series(&[1, 2]);
    let holed = vec![
        Quote {
            adj_close: None,
            close: None,
            ..quote(1, 100.0)
        },
        quote(2, 100.0),
    ];
    replace(&mut series, Etf::Qqq, holed);

    let rows = align(&series);
    let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![day(2)]);
}

#[test]
fn first_quote_per_date_wins_on_duplicates() {
    let mut series = full_series(&[1]);
    replace(&mut series, Etf::Spy, vec![quote(1, 480.0), quote(1, 999.0)]);

    let rows = align(&series);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].close(Etf::Spy), 480.0);
}

#[test]
fn output_ascends_even_when_input_is_unordered() {
    let days = [3, 1, 2];
    let series: Vec<(Etf, Vec<Quote>)> = Etf::ALL
        .iter()
        .map(|&etf| (etf, days.iter().map(|&d| quote(d, 50.0)).collect()))
        .collect();

    let rows = align(&series);
    let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![day(1), day(2), day(3)]);
}

#[test]
fn row_carries_each_symbols_own_close() {
    let series: Vec<(Etf, Vec<Quote>)> = Etf::ALL
        .iter()
        .enumerate()
        .map(|(i, &etf)| (etf, vec![quote(1, 100.0 + i as f64)]))
        .collect();

    let rows = align(&series);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].close(Etf::Spy), 100.0);
    assert_eq!(rows[0].close(Etf::Jnk), 106.0);
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(align(&[]).is_empty());
}
