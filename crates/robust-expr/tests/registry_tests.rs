//! Dispatch through the function table, including rejected calls

use robust_core::MetricSeries;
use robust_expr::{descriptions_json, evaluate, lookup, Arg, Call, Error};

fn series(name: &str, points: &[Option<f64>]) -> MetricSeries {
    MetricSeries::from_options(name, 1_700_000_000, 60, points).unwrap()
}

fn ks_call(name: &str, a: Vec<MetricSeries>, b: Vec<MetricSeries>, window: Arg) -> Call {
    Call::new(name, vec![Arg::Series(a), Arg::Series(b), window])
}

#[test]
fn test_both_names_produce_the_same_series() -> anyhow::Result<()> {
    let a = series("a1", &[Some(0.0), Some(1.0), Some(0.0), Some(1.0), Some(0.0)]);
    let b = series("a2", &[Some(1.0), Some(0.0), Some(5.0), Some(5.0), Some(6.0)]);

    let long = evaluate(
        &ks_call("kolmogorovSmirnovTest2", vec![a.clone()], vec![b.clone()], Arg::Integer(2)),
        10,
        20,
    )?;
    let short = evaluate(&ks_call("ksTest2", vec![a], vec![b], Arg::Integer(2)), 10, 20)?;

    assert_eq!(long, short);
    assert_eq!(long[0].start_time, 10);
    assert_eq!(long[0].stop_time, 20);
    assert_eq!(long[0].is_absent, vec![true, true, false, false, false]);
    Ok(())
}

#[test]
fn test_gap_in_one_input_is_tolerated() -> anyhow::Result<()> {
    let a = series("a1", &[Some(1.0), Some(2.0), None, Some(4.0)]);
    let b = series("a2", &[Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
    let out = evaluate(&ks_call("ksTest2", vec![a], vec![b], Arg::Integer(2)), 0, 240)?;
    assert_eq!(out[0].values[2], 0.0);
    assert_eq!(out[0].values[3], 0.0);
    Ok(())
}

#[test]
fn test_rejections() {
    let one = || vec![series("x", &[Some(1.0)])];

    let err = evaluate(&ks_call("ksTest2", vec![], one(), Arg::Integer(1)), 0, 60).unwrap_err();
    assert!(matches!(err, Error::WildcardNotAllowed));
    assert_eq!(err.to_string(), "found wildcard where series expected");

    let two = vec![series("x", &[Some(1.0)]), series("y", &[Some(2.0)])];
    let err = evaluate(&ks_call("ksTest2", one(), two, Arg::Integer(1)), 0, 60).unwrap_err();
    assert!(matches!(err, Error::WildcardNotAllowed));

    let err = evaluate(
        &ks_call("ksTest2", one(), one(), Arg::Float(2.0)),
        0,
        60,
    )
    .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { index: 2, .. }));

    let err = evaluate(&ks_call("ksTest2", one(), one(), Arg::Integer(0)), 0, 60).unwrap_err();
    assert!(matches!(err, Error::RobustCore(robust_core::Error::InvalidParameter(_))));

    let err = evaluate(
        &Call::new("ksTest2", vec![Arg::Series(one()), Arg::Series(one())]),
        0,
        60,
    )
    .unwrap_err();
    assert!(matches!(err, Error::ArgumentCount { expected: 3, got: 2, .. }));

    let mismatched = vec![series("z", &[Some(1.0), Some(2.0)])];
    let err = evaluate(&ks_call("ksTest2", one(), mismatched, Arg::Integer(1)), 0, 60).unwrap_err();
    assert!(matches!(err, Error::RobustCore(robust_core::Error::InvalidInput(_))));
}

#[test]
fn test_descriptions_json_lists_both_functions() -> anyhow::Result<()> {
    let json: serde_json::Value = serde_json::from_str(&descriptions_json()?)?;
    let ks = &json["kolmogorovSmirnovTest2"];
    assert_eq!(ks["module"], "graphite.render.functions");
    assert_eq!(ks["group"], "Transform");
    assert_eq!(ks["params"][2]["name"], "window");
    assert_eq!(ks["params"][2]["type"], "intOrInterval");
    assert_eq!(
        json["ksTest2"]["function"],
        "ksTest2(seriesList, seriesList, windowSize)"
    );

    let entry = lookup("ksTest2").expect("alias registered");
    assert_eq!(entry.description().name, "ksTest2");
    Ok(())
}
