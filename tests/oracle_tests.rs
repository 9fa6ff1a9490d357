// Host-side tests for oracle responses, request validation and presentation.

use oracle_core::*;

#[test]
fn parses_minimal_and_full_responses() {
    let minimal = OracleResponse::from_json(r#"{"p_yes":0.72,"p_no":0.28,"answer":"yes"}"#)
        .unwrap();
    assert_eq!(minimal.answer, Outcome::Yes);
    assert_eq!(minimal.model_version, None);
    assert_eq!(minimal.latency_ms, None);

    let full = OracleResponse::from_json(
        r#"{"p_yes":0.1,"p_no":0.9,"answer":"no","model_version":"m-3","latency_ms":120.0}"#,
    )
    .unwrap();
    assert_eq!(full.answer, Outcome::No);
    assert_eq!(full.model_version.as_deref(), Some("m-3"));
    assert_eq!(full.latency_ms, Some(120.0));
}

#[test]
fn unknown_answer_is_malformed() {
    let err = OracleResponse::from_json(r#"{"p_yes":0.5,"p_no":0.5,"answer":"maybe"}"#)
        .unwrap_err();
    assert!(matches!(err, OracleError::Malformed(_)), "{err:?}");
}

#[test]
fn spin_request_rejects_empty_sectors() {
    let certain_yes = OracleResponse::from_json(r#"{"p_yes":1.0,"p_no":0.0,"answer":"no"}"#)
        .unwrap();
    assert_eq!(
        SpinRequest::from_response(&certain_yes).unwrap_err(),
        SpinError::EmptySector(Outcome::No)
    );
    let certain_no = OracleResponse::from_json(r#"{"p_yes":0.0,"p_no":1.0,"answer":"yes"}"#)
        .unwrap();
    assert_eq!(
        SpinRequest::from_response(&certain_no).unwrap_err(),
        SpinError::EmptySector(Outcome::Yes)
    );

    let fine = OracleResponse::from_json(r#"{"p_yes":1.0,"p_no":0.0,"answer":"yes"}"#).unwrap();
    let request = SpinRequest::from_response(&fine).unwrap();
    assert_eq!(request.outcome, Outcome::Yes);
    assert_eq!(request.probability.p_yes(), 1.0);
}

#[test]
fn spin_request_rejects_out_of_range_probability() {
    let err = SpinRequest::new(1.2, Outcome::Yes).unwrap_err();
    assert_eq!(err, SpinError::ProbabilityOutOfRange(1.2));
    assert!(Probability::try_from(-0.5).is_err());
    assert!(Probability::new(f64::NAN).is_err());
}

#[test]
fn ask_url_carries_the_question() {
    let url = ask_url("http://localhost:8000", "Will it rain? 100% sure & soon").unwrap();
    assert_eq!(url.path(), "/ask_model/");
    assert_eq!(url.host_str(), Some("localhost"));
    assert_eq!(url.port(), Some(8000));
    let question = url
        .query_pairs()
        .find(|(k, _)| k == "question")
        .map(|(_, v)| v.into_owned());
    assert_eq!(question.as_deref(), Some("Will it rain? 100% sure & soon"));
}

#[test]
fn ask_url_is_rooted_at_the_host() {
    let url = ask_url("https://api.example.com/v1/", "q").unwrap();
    assert_eq!(url.as_str(), "https://api.example.com/ask_model/?question=q");
    let url = ask_url("https://api.example.com/v1", "q").unwrap();
    assert_eq!(url.path(), "/ask_model/");
}

#[test]
fn blank_base_falls_back_to_default() {
    let url = ask_url("   ", "q").unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:8000/ask_model/?question=q");
}

#[test]
fn invalid_base_is_reported() {
    let err = ask_url("not a url", "q").unwrap_err();
    assert!(matches!(err, OracleError::InvalidBaseUrl(_)), "{err:?}");
}

#[test]
fn status_error_reads_like_the_toast() {
    assert_eq!(OracleError::Status(503).to_string(), "Model API error: 503");
}

#[test]
fn percentage_rounds_to_whole_numbers() {
    assert_eq!(format_percentage(0.724), "72%");
    assert_eq!(format_percentage(0.726), "73%");
    assert_eq!(format_percentage(1.0), "100%");
    assert_eq!(format_percentage(0.0), "0%");
}

#[test]
fn confidence_labels_cover_the_scale() {
    let cases = [
        (0.95, "Absolute Certainty"),
        (0.9, "Very Likely"),
        (0.8, "Very Likely"),
        (0.65, "Probable"),
        (0.55, "Leaning Yes"),
        (0.5, "Uncertain"),
        (0.45, "Leaning No"),
        (0.3, "Doubtful"),
        (0.2, "Very Unlikely"),
        (0.05, "Impossible"),
    ];
    for (p, label) in cases {
        assert_eq!(confidence_label(p), label, "p_yes={p}");
    }
}

#[test]
fn outcome_parsing_and_serde() {
    assert_eq!(" YES ".parse::<Outcome>().unwrap(), Outcome::Yes);
    assert_eq!("no".parse::<Outcome>().unwrap(), Outcome::No);
    assert_eq!(
        "maybe".parse::<Outcome>().unwrap_err(),
        SpinError::UnknownOutcome("maybe".to_string())
    );
    assert_eq!(serde_json::to_string(&Outcome::Yes).unwrap(), r#""yes""#);
    assert_eq!(Outcome::No.to_string(), "no");
}

#[test]
fn themes_are_indexed_by_id() {
    for id in ThemeId::ALL {
        assert_eq!(theme(id).id, id);
        assert_eq!(id.as_str().parse::<ThemeId>().unwrap(), id);
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            format!("\"{}\"", id.as_str())
        );
    }
    assert_eq!("NOIR".parse::<ThemeId>().unwrap(), ThemeId::Noir);
    assert_eq!(
        "neon".parse::<ThemeId>().unwrap_err(),
        UnknownTheme("neon".to_string())
    );
    let dtu = theme(ThemeId::Dtu);
    assert_eq!(dtu.sector_color(Outcome::Yes), "#990000");
    assert_eq!(dtu.sector_color(Outcome::No), "#1E4D8C");
    assert_eq!(dtu.ambient, AmbientEffect::Grid);
    assert_eq!(dtu.ambient.as_str(), "grid");
    assert_eq!(theme(ThemeId::Cyber).ambient.as_str(), "glitch");
}

#[test]
fn theme_change_keeps_loading_message_while_busy() {
    for id in ThemeId::ALL {
        let t = theme(id);
        assert_eq!(t.status_hint(false), Some(t.idle_hint), "{id}");
        assert_eq!(t.status_hint(true), None, "{id}");
    }
}
