use afford_core::types::{CountyId, IdentifierError, RegionId, TractId, ZipCode};

#[test]
fn tract_id_requires_eleven_digits() {
    assert!(TractId::new("08013012201").is_ok());

    match TractId::new("0801301220") {
        Err(IdentifierError::WrongLength { expected: 11, got: 10, .. }) => {}
        other => panic!("expected WrongLength, got {other:?}"),
    }
    match TractId::new("08013O12201") {
        Err(IdentifierError::NonDigit(_)) => {}
        other => panic!("expected NonDigit, got {other:?}"),
    }
}

#[test]
fn tract_id_from_fips_parts() {
    let id = TractId::from_parts("08", "013", "012201").unwrap();
    assert_eq!(id.as_str(), "08013012201");

    assert!(TractId::from_parts("8", "013", "012201").is_err());
    assert!(TractId::from_parts("08", "13", "012201").is_err());
    assert!(TractId::from_parts("08", "013", "12201").is_err());
}

#[test]
fn tract_id_county_is_leading_five_digits() {
    let id = TractId::new("08013012201").unwrap();
    assert_eq!(id.county(), CountyId::new("08013").unwrap());
    assert_eq!(id.county(), CountyId::from_parts("08", "013").unwrap());
    assert_eq!(format!("{} in {}", id, id.county()), "08013012201 in 08013");
}

#[test]
fn zip_code_requires_five_digits() {
    assert!(ZipCode::new("80301").is_ok());
    assert!(ZipCode::new("803011").is_err());
    assert!(ZipCode::new("8030a").is_err());
}

#[test]
fn region_id_rejects_empty() {
    assert!(RegionId::new("14500").is_ok());
    match RegionId::new("") {
        Err(IdentifierError::EmptyRegionId) => {}
        other => panic!("expected EmptyRegionId, got {other:?}"),
    }
}

#[test]
fn identifiers_serialize_transparently() {
    let id = TractId::new("08013012201").unwrap();
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"08013012201\"");

    let back: TractId = serde_json::from_str("\"08013012201\"").unwrap();
    assert_eq!(back, id);
}
