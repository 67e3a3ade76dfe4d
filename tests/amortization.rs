use emi::{compute_emi, generate_schedule, LoanError, LoanTerms};
use test_log::test;

const TOLERANCE: f64 = 1e-6;

fn sample_terms() -> Vec<LoanTerms> {
    let mut terms = Vec::new();
    for &principal in &[10000., 120000., 2500000., 10000000.] {
        for &rate in &[0., 1., 7.25, 10., 18.5, 30.] {
            for &months in &[1, 12, 60, 181, 360] {
                terms.push(LoanTerms::new(principal, rate, months));
            }
        }
    }
    terms
}

#[test]
fn schedule_has_one_record_per_month() {
    for terms in sample_terms() {
        let amortization = terms.amortize().unwrap();
        let schedule = &amortization.schedule;
        assert_eq!(schedule.len(), terms.term_months as usize, "{}", terms);
        for (i, record) in schedule.records.iter().enumerate() {
            assert_eq!(record.period, i as u32 + 1);
        }
    }
}

#[test]
fn final_balance_is_exactly_zero() {
    for terms in sample_terms() {
        let amortization = terms.amortize().unwrap();
        let last = amortization.schedule.last().unwrap();
        assert_eq!(last.closing_balance, 0., "{}", terms);
    }
}

#[test]
fn each_period_balances() {
    for terms in sample_terms() {
        let amortization = terms.amortize().unwrap();
        let records = &amortization.schedule.records;

        assert_eq!(records[0].opening_balance, terms.principal);
        for record in records {
            let reduction = record.opening_balance - record.closing_balance;
            let paid = record.interest_portion + record.principal_portion;
            assert!(
                (reduction - paid).abs() < TOLERANCE,
                "{}: period {} reduced {} but paid {}",
                terms,
                record.period,
                reduction,
                paid
            );
        }
        for record in &records[..records.len() - 1] {
            assert!((record.payment() - amortization.emi).abs() < TOLERANCE);
        }
    }
}

#[test]
fn totals_match_records() {
    for terms in sample_terms() {
        let amortization = terms.amortize().unwrap();
        let schedule = &amortization.schedule;

        let summed: f64 = schedule.records.iter().map(|r| r.interest_portion).sum();
        assert!((schedule.total_interest - summed).abs() < TOLERANCE, "{}", terms);
        let expected_paid = terms.principal + schedule.total_interest;
        assert!((schedule.total_paid - expected_paid).abs() < TOLERANCE);
    }
}

#[test]
fn zero_rate_has_no_interest() {
    let emi = compute_emi(100000., 0., 10).unwrap();
    assert_eq!(emi, 10000.);

    let schedule = generate_schedule(100000., 0., 10, emi);
    assert_eq!(schedule.len(), 10);
    for record in &schedule.records {
        assert_eq!(record.interest_portion, 0.);
        assert_eq!(record.principal_portion, 10000.);
    }
    assert_eq!(schedule.total_paid, 100000.);
}

#[test]
fn reference_loan() {
    let emi = compute_emi(120000., 10., 12).unwrap();
    assert_eq!(format!("{:.2}", emi), "10549.91");

    let schedule = generate_schedule(120000., 10., 12, emi);
    let first = schedule.record(1).unwrap();
    assert_eq!(format!("{:.2}", first.opening_balance), "120000.00");
    assert_eq!(format!("{:.2}", first.interest_portion), "1000.00");
    assert_eq!(format!("{:.2}", first.principal_portion), "9549.91");
    assert_eq!(format!("{:.2}", first.closing_balance), "110450.09");
}

#[test]
fn zero_term_is_invalid() {
    for &rate in &[0., 5., 30.] {
        for &principal in &[1., 120000.] {
            assert_eq!(
                compute_emi(principal, rate, 0),
                Err(LoanError::InvalidTerm { term_months: 0 })
            );
        }
    }
}

#[test]
fn emi_increases_with_rate() {
    for &months in &[12, 120, 360] {
        let mut previous = compute_emi(250000., 0., months).unwrap();
        for step in 1..=60 {
            let emi = compute_emi(250000., step as f64 * 0.5, months).unwrap();
            assert!(emi > previous, "{} months at {}%", months, step as f64 * 0.5);
            previous = emi;
        }
    }
}
