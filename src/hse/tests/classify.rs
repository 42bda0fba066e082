use super::common::*;
use crate::hse::rules::lookup_rule;
use crate::hse::scoring::{classify, fallback_band, RiskBand};

#[test]
fn positive_dimension_boundary_at_three_is_baixo() {
    assert_eq!(fallback_band(3.0, true), RiskBand::Baixo);
    assert_eq!(fallback_band(4.0, true), RiskBand::Baixo);
    assert_eq!(fallback_band(2.99, true), RiskBand::Medio);
}

#[test]
fn negative_dimension_boundary_at_one_is_baixo() {
    assert_eq!(fallback_band(1.0, false), RiskBand::Baixo);
    assert_eq!(fallback_band(0.0, false), RiskBand::Baixo);
    assert_eq!(fallback_band(1.01, false), RiskBand::Medio);
}

#[test]
fn fallback_bands_mirror_across_polarity() {
    // classify(a, positive) must equal classify(4 - a, negative) across the
    // whole scale, boundaries included.
    for step in 0..=400 {
        let average = f64::from(step) / 100.0;
        assert_eq!(
            fallback_band(average, true),
            fallback_band(4.0 - average, false),
            "mirror symmetry broken at average {average}"
        );
    }
}

#[test]
fn all_four_bands_are_reachable_for_both_polarities() {
    assert_eq!(fallback_band(3.5, true), RiskBand::Baixo);
    assert_eq!(fallback_band(2.5, true), RiskBand::Medio);
    assert_eq!(fallback_band(1.5, true), RiskBand::Moderado);
    assert_eq!(fallback_band(0.5, true), RiskBand::Alto);

    assert_eq!(fallback_band(0.5, false), RiskBand::Baixo);
    assert_eq!(fallback_band(1.5, false), RiskBand::Medio);
    assert_eq!(fallback_band(2.5, false), RiskBand::Moderado);
    assert_eq!(fallback_band(3.5, false), RiskBand::Alto);
}

#[test]
fn custom_rule_takes_precedence_over_fallback() {
    let apoio = dimension(3, "Apoio da Chefia", true);
    let rules = vec![rule(1, 3, 0.0, 1.0, "Risco crítico")];

    // fallback alone would say "alto" for 0.8
    assert_eq!(classify(&rules, &apoio, 0.8), "Risco crítico");
}

#[test]
fn rule_bounds_are_inclusive() {
    let apoio = dimension(3, "Apoio da Chefia", true);
    let rules = vec![rule(1, 3, 0.0, 1.0, "Risco crítico")];

    assert_eq!(classify(&rules, &apoio, 0.0), "Risco crítico");
    assert_eq!(classify(&rules, &apoio, 1.0), "Risco crítico");
    assert_eq!(classify(&rules, &apoio, 1.01), "moderado");
}

#[test]
fn overlapping_rules_resolve_by_ascending_min_val() {
    let demandas = dimension(1, "Demandas", false);
    let rules = vec![
        rule(2, 1, 1.5, 4.0, "faixa superior"),
        rule(1, 1, 0.0, 2.0, "faixa inferior"),
    ];

    let matched = lookup_rule(&rules, demandas.id, 1.8).expect("rule matches");
    assert_eq!(matched.custom_text, "faixa inferior");
}

#[test]
fn rules_of_other_dimensions_are_ignored() {
    let demandas = dimension(1, "Demandas", false);
    let rules = vec![rule(1, 2, 0.0, 4.0, "de outra dimensão")];

    assert!(lookup_rule(&rules, demandas.id, 2.0).is_none());
    assert_eq!(classify(&rules, &demandas, 2.0), "médio");
}

#[test]
fn gap_between_rules_falls_back_deterministically() {
    let demandas = dimension(1, "Demandas", false);
    let rules = vec![
        rule(1, 1, 0.0, 1.0, "tranquilo"),
        rule(2, 1, 3.0, 4.0, "crítico"),
    ];

    // 2.0 sits in the gap: never an error, always the fallback band.
    assert_eq!(classify(&rules, &demandas, 2.0), "médio");
}
