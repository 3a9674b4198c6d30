use intake_cli::forms;
use intake_cli::submit::{SubmitError, build_properties, check_required};
use serde_json::{Map, Value, json};

fn as_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

fn diagnosis_input() -> Map<String, Value> {
    as_map(json!({
        "Nombre": "Ana López",
        "Email": "ana@example.com",
        "WhatsApp": "+52 55 2202 6291",
        "Red_Social": "https://instagram.com/ana",
        "Tipo_Perfil": "Marca Personal",
        "Objetivo": "Conseguir clientes",
        "MP_Habilidad": "Diseño de marca",
        "MP_Avatar": "Emprendedoras creativas",
        "MP_Dolor": "No saben comunicar su valor",
        "MP_Diferenciador": "Diez años en agencias",
    }))
}

#[test]
fn wrapper_kind_follows_question_kind() {
    let schema = forms::find_form("onboarding").unwrap();
    let input = as_map(json!({
        "Nombre completo": "Ana López",
        "Correo electrónico": "ana@example.com",
        "WhatsApp": "+52 55 2202 6291",
        "¿En qué país vives actualmente?": "México",
        "¿En qué nicho te gustaría posicionar tu marca personal?": "fitness",
        "¿Cómo te gustaría que te llamen públicamente en tu marca?": ["Apodo / alias"],
    }));

    let properties = build_properties(schema, &input).unwrap();
    assert_eq!(properties.len(), input.len());

    // Identity fields use their special-cased wrappers regardless of kind
    assert_eq!(
        properties["Nombre completo"],
        json!({ "title": [{ "text": { "content": "Ana López" } }] })
    );
    assert_eq!(
        properties["Correo electrónico"],
        json!({ "email": "ana@example.com" })
    );
    assert_eq!(
        properties["WhatsApp"],
        json!({ "phone_number": "+52 55 2202 6291" })
    );

    // Kind-directed wrapping for everything else
    assert_eq!(
        properties["¿En qué país vives actualmente?"],
        json!({ "select": { "name": "México" } })
    );
    assert_eq!(
        properties["¿En qué nicho te gustaría posicionar tu marca personal?"],
        json!({ "rich_text": [{ "text": { "content": "fitness" } }] })
    );
    assert_eq!(
        properties["¿Cómo te gustaría que te llamen públicamente en tu marca?"],
        json!({ "multi_select": [{ "name": "Apodo / alias" }] })
    );
}

#[test]
fn declared_multi_select_column_accepts_single_choice_answer() {
    // The occupation column is multi-select on the external store even
    // though the form presents it as single-choice
    let schema = forms::find_form("onboarding").unwrap();
    let input = as_map(json!({
        "Nombre completo": "Ana López",
        "Correo electrónico": "ana@example.com",
        "¿A qué te dedicas hoy principalmente?": "Freelancer / independiente",
    }));

    let properties = build_properties(schema, &input).unwrap();
    assert_eq!(
        properties["¿A qué te dedicas hoy principalmente?"],
        json!({ "multi_select": [{ "name": "Freelancer / independiente" }] })
    );
}

#[test]
fn unknown_keys_are_dropped() {
    let schema = forms::find_form("onboarding").unwrap();
    let input = as_map(json!({
        "Nombre completo": "Ana López",
        "Correo electrónico": "ana@example.com",
        "Columna inventada": "lo que sea",
    }));

    let properties = build_properties(schema, &input).unwrap();
    assert_eq!(properties.len(), 2);
    assert!(!properties.contains_key("Columna inventada"));
}

#[test]
fn missing_identity_fields_fail_before_mapping() {
    let schema = forms::find_form("onboarding").unwrap();
    let input = as_map(json!({
        "¿En qué país vives actualmente?": "México",
    }));

    let err = build_properties(schema, &input).unwrap_err();
    assert_eq!(err.to_string(), "Faltan campos obligatorios");
    let SubmitError::MissingFields { details } = &err;
    assert!(details.contains("Nombre completo"));
    assert!(details.contains("Correo electrónico"));

    // Whitespace-only values count as missing
    let input = as_map(json!({
        "Nombre completo": "   ",
        "Correo electrónico": "ana@example.com",
    }));
    assert!(check_required(schema, &input).is_err());
}

#[test]
fn personal_branch_fills_mp_and_empties_neg() {
    let schema = forms::find_form("diagnosis").unwrap();
    assert!(schema.is_fixed_shape());
    let properties = build_properties(schema, &diagnosis_input()).unwrap();

    // Fixed shape: every schema field is present
    assert_eq!(properties.len(), schema.questions.len());

    assert_eq!(
        properties["Tipo_Perfil"],
        json!({ "select": { "name": "Marca Personal" } })
    );
    assert_eq!(
        properties["MP_Habilidad"],
        json!({ "rich_text": [{ "text": { "content": "Diseño de marca" } }] })
    );
    assert_eq!(
        properties["MP_Avatar"],
        json!({ "rich_text": [{ "text": { "content": "Emprendedoras creativas" } }] })
    );
    assert_eq!(
        properties["MP_Dolor"],
        json!({ "rich_text": [{ "text": { "content": "No saben comunicar su valor" } }] })
    );
    assert_eq!(
        properties["MP_Diferenciador"],
        json!({ "rich_text": [{ "text": { "content": "Diez años en agencias" } }] })
    );

    // Unselected branch: written as empty values, not omitted
    for field in ["NEG_Producto", "NEG_Cliente", "NEG_Problema", "NEG_Infraestructura"] {
        assert_eq!(
            properties[field],
            json!({ "rich_text": [{ "text": { "content": "" } }] }),
            "{field} should be an empty rich-text value"
        );
    }
}

#[test]
fn business_branch_normalizes_discriminator_and_swaps_arms() {
    let schema = forms::find_form("diagnosis").unwrap();
    let mut input = diagnosis_input();
    input.insert("Tipo_Perfil".to_string(), json!("Negocio Establecido"));
    input.insert("NEG_Producto".to_string(), json!("Asesorías fiscales"));

    let properties = build_properties(schema, &input).unwrap();

    assert_eq!(
        properties["Tipo_Perfil"],
        json!({ "select": { "name": "Negocio" } })
    );
    assert_eq!(
        properties["NEG_Producto"],
        json!({ "rich_text": [{ "text": { "content": "Asesorías fiscales" } }] })
    );
    // The personal-brand answers are present in the input but belong to the
    // unselected branch, so they are written empty
    assert_eq!(
        properties["MP_Habilidad"],
        json!({ "rich_text": [{ "text": { "content": "" } }] })
    );
}

#[test]
fn fixed_shape_fills_missing_optional_fields() {
    let schema = forms::find_form("diagnosis").unwrap();
    let mut input = diagnosis_input();
    input.remove("WhatsApp");
    input.remove("Objetivo");
    input.remove("Red_Social");

    let properties = build_properties(schema, &input).unwrap();

    assert_eq!(properties["WhatsApp"], json!({ "phone_number": null }));
    assert_eq!(
        properties["Objetivo"],
        json!({ "select": { "name": "Sin especificar" } })
    );
    assert_eq!(
        properties["Red_Social"],
        json!({ "rich_text": [{ "text": { "content": "" } }] })
    );
}

#[test]
fn missing_discriminator_fails_fast() {
    let schema = forms::find_form("diagnosis").unwrap();
    let mut input = diagnosis_input();
    input.remove("Tipo_Perfil");

    let err = build_properties(schema, &input).unwrap_err();
    assert_eq!(err.to_string(), "Faltan campos obligatorios");
    assert!(err.details().contains("Tipo_Perfil"));
}
