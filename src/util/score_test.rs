use super::*;

#[test]
fn parses_standard_final_result() {
    let line = parse_final_result("112 - 108").unwrap();
    assert_eq!(line, ScoreLine { home: 112, away: 108 });
}

#[test]
fn parses_without_spaces() {
    assert_eq!(
        parse_final_result("95-103"),
        Some(ScoreLine { home: 95, away: 103 })
    );
}

#[test]
fn malformed_results_yield_none() {
    assert_eq!(parse_final_result(""), None);
    assert_eq!(parse_final_result("TBD"), None);
    assert_eq!(parse_final_result("112 : 108"), None);
    // Cricket innings notation is out of scope for numeric parsing.
    assert_eq!(parse_final_result("287/5 - 290/4"), None);
}

#[test]
fn winner_picks_the_higher_side() {
    assert_eq!(
        parse_final_result("112 - 108").unwrap().winner(),
        Some(Side::Home)
    );
    assert_eq!(
        parse_final_result("95 - 103").unwrap().winner(),
        Some(Side::Away)
    );
}

#[test]
fn tie_has_no_winner() {
    assert_eq!(parse_final_result("100 - 100").unwrap().winner(), None);
}
