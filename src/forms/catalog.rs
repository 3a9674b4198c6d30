//! Built-in form catalog.
//!
//! Prompts, options and field names are the live marketing copy; field names
//! double as column names on the external store, so changing one here without
//! migrating the destination database will surface as an upstream rejection.

use once_cell::sync::Lazy;

use super::{BranchArm, BranchConfig, FormSchema, InputKind, Question, WrapperKind};

const fn text(id: &'static str, prompt: &'static str, description: Option<&'static str>) -> Question {
    Question {
        id,
        prompt,
        description,
        kind: InputKind::Text,
        options: &[],
        max_selections: None,
        field: prompt,
        wrapper: None,
        fallback: None,
    }
}

const fn select(id: &'static str, prompt: &'static str, options: &'static [&'static str]) -> Question {
    Question {
        id,
        prompt,
        description: None,
        kind: InputKind::Select,
        options,
        max_selections: None,
        field: prompt,
        wrapper: None,
        fallback: None,
    }
}

const fn multi(id: &'static str, prompt: &'static str, options: &'static [&'static str]) -> Question {
    Question {
        id,
        prompt,
        description: None,
        kind: InputKind::MultiSelect,
        options,
        max_selections: None,
        field: prompt,
        wrapper: None,
        fallback: None,
    }
}

/// The personal-brand onboarding questionnaire, one question per step.
const ONBOARDING_QUESTIONS: &[Question] = &[
    // Bloque 1: quién eres
    Question {
        wrapper: Some(WrapperKind::Title),
        ..text("b1-q1", "Nombre completo", Some("(Ej. Juan Pérez)"))
    },
    multi(
        "b1-q2",
        "¿Cómo te gustaría que te llamen públicamente en tu marca?",
        &["Mi nombre tal cual", "Nombre + apellido", "Apodo / alias", "Aún no lo sé"],
    ),
    select("b1-q3", "¿En qué país vives actualmente?", &["México", "Estados Unidos"]),
    // The external store declares this column as multi-select
    Question {
        wrapper: Some(WrapperKind::MultiSelect),
        ..select(
            "b1-q4",
            "¿A qué te dedicas hoy principalmente?",
            &["Empleado/a", "Freelancer / independiente", "Emprendedor/a", "Estudiante", "Otro"],
        )
    },
    select(
        "b1-q5",
        "¿Hace cuánto tiempo estás en tu área principal de experiencia?",
        &["Menos de 1 año", "1–3 años", "3–5 años", "Más de 5 años"],
    ),
    // Bloque 2: nicho
    text(
        "b2-q1",
        "¿En qué nicho te gustaría posicionar tu marca personal?",
        Some("(Respuesta corta — ejemplo: fitness, nutrición, marketing, psicología, espiritualidad, finanzas, etc.)"),
    ),
    multi(
        "b2-q2",
        "¿Qué problema principal ayudas a resolver en ese nicho?",
        &[
            "Falta de conocimiento",
            "Falta de resultados",
            "Falta de claridad",
            "Falta de disciplina",
            "Falta de sistema",
            "Otro",
        ],
    ),
    select(
        "b2-q3",
        "¿Cuál es tu nivel de experiencia percibido en ese tema?",
        &[
            "Principiante (estoy aprendiendo)",
            "Intermedio (ya tengo resultados)",
            "Avanzado (he ayudado a otros)",
            "Experto (vivo de esto)",
        ],
    ),
    select(
        "b2-q4",
        "¿Tienes resultados propios o casos reales que puedas contar?",
        &["Sí personales", "Sí de clientes", "Ambos", "No todavía"],
    ),
    text(
        "b2-q5",
        "¿Qué te diferencia de otros en tu mismo nicho?",
        Some("(Respuesta larga — aquí sale el oro del storytelling)"),
    ),
    // Bloque 3: objetivos
    Question {
        description: Some("(Selecciona máximo 2)"),
        max_selections: Some(2),
        ..multi(
            "b3-q1",
            "¿Para qué quieres crear tu marca personal?",
            &[
                "Generar ingresos",
                "Conseguir clientes",
                "Vender productos digitales",
                "Conseguir citas / llamadas",
                "Posicionarme como referente",
                "Crear comunidad",
            ],
        )
    },
    text(
        "b3-q2",
        "¿Cuál sería un resultado ideal en 6 meses con tu marca personal?",
        Some("(Respuesta larga)"),
    ),
    select(
        "b3-q3",
        "¿Cuánto te gustaría generar mensualmente con tu marca personal?",
        &[
            "Solo validar (primeros ingresos)",
            "$5k – $10k MXN",
            "$10k – $30k MXN",
            "+$30k MXN",
            "Aún no lo sé",
        ],
    ),
    // Bloque 4: oferta
    multi(
        "b4-q1",
        "¿Qué te gustaría vender principalmente?",
        &[
            "Servicios 1:1",
            "Servicios grupales",
            "Cursos digitales",
            "Mentorías",
            "Membresía",
            "Aún no lo sé",
        ],
    ),
    select(
        "b4-q2",
        "¿Ya tienes algún producto o servicio creado?",
        &["Sí y ya lo vendo", "Sí pero no lo vendo aún", "Todavía no"],
    ),
    select(
        "b4-q3",
        "¿Cuál sería el precio aproximado de tu oferta principal?",
        &[
            "Gratis",
            "$500 a $1500 MXN",
            "$1500 a $5000 MXN",
            "$5000 a $15000 MXN",
            "+$15000 MXN",
            "Todavía no lo sé",
        ],
    ),
    select(
        "b4-q4",
        "¿Te gustaría ofrecer algo gratuito para atraer personas?",
        &[
            "Ebook / guía",
            "Checklist / plantilla",
            "Clase o masterclass",
            "Reto",
            "Sí pero no sé qué todavía",
        ],
    ),
    // Bloque 5: contenido
    multi(
        "b5-q1",
        "¿En qué redes sociales quieres construir tu marca personal?",
        &["Instagram", "TikTok", "YouTube", "Facebook", "LinkedIn", "Threads", "Pinterest", "Otra"],
    ),
    multi(
        "b5-q2",
        "¿Qué formatos de contenido te resultan más cómodos?",
        &[
            "Video hablando a cámara",
            "Texto",
            "Carruseles",
            "Audio / podcast",
            "Todos me resultan cómodos",
        ],
    ),
    select(
        "b5-q3",
        "¿Con qué frecuencia podrías crear contenido de forma realista?",
        &["1–2 veces por semana", "3–4 veces por semana", "Diario", "Solo fines de semana"],
    ),
    multi(
        "b5-q4",
        "¿Qué tono te gustaría para tu marca?",
        &["Profesional", "Cercano", "Inspirador", "Directo / sin filtro", "Educativo", "Divertido"],
    ),
    text(
        "b5-q5",
        "Escribe tres marcas / personas que sigues por que te gusta mucho su contenido y qué te gusta de cada una",
        Some("(Ej. Me gusta la cuenta de @lavidadeuncreativo porque comparte tips sobre “x”…., o me gusta la cuenta de “x” por los colores que usa o el estilo que tiene su feed.)"),
    ),
    // Bloque 6: ventas
    select(
        "b6-q1",
        "¿Cómo te gustaría cerrar ventas principalmente?",
        &[
            "WhatsApp",
            "Llamada / videollamada",
            "Página de venta automática",
            "DM en redes",
            "Aún no lo sé",
        ],
    ),
    select(
        "b6-q2",
        "¿Ya tienes WhatsApp Business o estás dispuesto/a a usarlo?",
        &["Sí", "No pero estoy dispuest@ a usarlo", "No"],
    ),
    select("b6-q3", "¿Tienes página web actualmente?", &["Sí", "No", "No pero quiero una"]),
    select(
        "b6-q4",
        "¿Qué tan importante es para ti ahorrar tiempo?",
        &["Muy importante", "Importante", "Poco importante", "No lo sé"],
    ),
    // Bloque 7: frenos
    multi(
        "b7-q1",
        "¿Qué es lo que más te frena hoy para avanzar con tu marca personal?",
        &[
            "Falta de claridad",
            "Miedo a vender",
            "Falta de tiempo",
            "Falta de confianza",
            "Falta de organización",
            "Otro",
        ],
    ),
    multi(
        "b7-q2",
        "¿Qué no te gustaría que fuera tu marca personal?",
        &[
            "Aburrida",
            "Que se sienta falsa",
            "Que parezca vende humo",
            "Que no transmita confianza",
            "Que se convierta en cuenta de memes",
            "Otra",
        ],
    ),
    select(
        "b7-q3",
        "¿Estás dispuesto/a a invertir tiempo y/o dinero en este proceso?",
        &["Sí", "Tal vez", "No"],
    ),
    // Bloque 8: contacto
    Question {
        wrapper: Some(WrapperKind::Email),
        ..text(
            "b8-q1",
            "Correo electrónico",
            Some("(Escribe el correo que más utilizas (o el que revisas siempre))"),
        )
    },
    Question {
        wrapper: Some(WrapperKind::Phone),
        ..text("b8-q2", "WhatsApp", Some("(Ej. +52 55 2202 6291)"))
    },
];

/// Diagnosis form: shared identity fields plus two mutually exclusive
/// branches selected by the profile-type discriminator. Fields are named
/// after the destination columns.
const DIAGNOSIS: &[Question] = &[
    Question {
        id: "nombre",
        prompt: "Nombre completo",
        description: Some("(Ej. Juan Pérez)"),
        kind: InputKind::Text,
        options: &[],
        max_selections: None,
        field: "Nombre",
        wrapper: Some(WrapperKind::Title),
        fallback: None,
    },
    Question {
        id: "email",
        prompt: "Correo electrónico",
        description: Some("(El correo que revisas siempre)"),
        kind: InputKind::Text,
        options: &[],
        max_selections: None,
        field: "Email",
        wrapper: Some(WrapperKind::Email),
        fallback: None,
    },
    Question {
        id: "whatsapp",
        prompt: "WhatsApp",
        description: Some("(Ej. +52 55 2202 6291)"),
        kind: InputKind::Text,
        options: &[],
        max_selections: None,
        field: "WhatsApp",
        wrapper: Some(WrapperKind::Phone),
        fallback: None,
    },
    Question {
        id: "red-social",
        prompt: "Link de tu red social principal",
        description: Some("(Instagram, TikTok, página web...)"),
        kind: InputKind::Text,
        options: &[],
        max_selections: None,
        field: "Red_Social",
        wrapper: None,
        fallback: None,
    },
    Question {
        id: "tipo-perfil",
        prompt: "¿Qué describe mejor tu situación?",
        description: None,
        kind: InputKind::Select,
        options: &["Marca Personal", "Negocio Establecido"],
        max_selections: None,
        field: "Tipo_Perfil",
        wrapper: None,
        fallback: None,
    },
    Question {
        id: "objetivo",
        prompt: "¿Cuál es tu objetivo principal ahora mismo?",
        description: Some("(Respuesta corta)"),
        kind: InputKind::Text,
        options: &[],
        max_selections: None,
        field: "Objetivo",
        wrapper: Some(WrapperKind::Select),
        fallback: Some("Sin especificar"),
    },
    // Rama Marca Personal
    Question {
        id: "mp-habilidad",
        prompt: "¿Cuál es tu habilidad principal?",
        description: None,
        kind: InputKind::Text,
        options: &[],
        max_selections: None,
        field: "MP_Habilidad",
        wrapper: None,
        fallback: None,
    },
    Question {
        id: "mp-avatar",
        prompt: "¿A quién quieres ayudar con esa habilidad?",
        description: None,
        kind: InputKind::Text,
        options: &[],
        max_selections: None,
        field: "MP_Avatar",
        wrapper: None,
        fallback: None,
    },
    Question {
        id: "mp-dolor",
        prompt: "¿Qué dolor o problema resuelves para esa persona?",
        description: None,
        kind: InputKind::Text,
        options: &[],
        max_selections: None,
        field: "MP_Dolor",
        wrapper: None,
        fallback: None,
    },
    Question {
        id: "mp-diferenciador",
        prompt: "¿Qué te hace diferente de otros que hacen lo mismo?",
        description: None,
        kind: InputKind::Text,
        options: &[],
        max_selections: None,
        field: "MP_Diferenciador",
        wrapper: None,
        fallback: None,
    },
    // Rama Negocio
    Question {
        id: "neg-producto",
        prompt: "¿Cuál es tu producto o servicio estrella?",
        description: None,
        kind: InputKind::Text,
        options: &[],
        max_selections: None,
        field: "NEG_Producto",
        wrapper: None,
        fallback: None,
    },
    Question {
        id: "neg-cliente",
        prompt: "¿Quién es tu cliente ideal?",
        description: None,
        kind: InputKind::Text,
        options: &[],
        max_selections: None,
        field: "NEG_Cliente",
        wrapper: None,
        fallback: None,
    },
    Question {
        id: "neg-problema",
        prompt: "¿Qué problema del mercado resuelve tu negocio?",
        description: None,
        kind: InputKind::Text,
        options: &[],
        max_selections: None,
        field: "NEG_Problema",
        wrapper: None,
        fallback: None,
    },
    Question {
        id: "neg-infraestructura",
        prompt: "¿Qué infraestructura tienes hoy (equipo, sistemas, procesos)?",
        description: None,
        kind: InputKind::Text,
        options: &[],
        max_selections: None,
        field: "NEG_Infraestructura",
        wrapper: None,
        fallback: None,
    },
];

const FORMS: &[FormSchema] = &[
    FormSchema {
        slug: "onboarding",
        title: "Cuestionario de Marca Personal",
        questions: ONBOARDING_QUESTIONS,
        branches: None,
    },
    FormSchema {
        slug: "diagnosis",
        title: "Diagnóstico",
        questions: DIAGNOSIS,
        branches: Some(BranchConfig {
            discriminator: "Tipo_Perfil",
            normalize: &[("Negocio Establecido", "Negocio")],
            arms: &[
                BranchArm {
                    value: "Marca Personal",
                    fields: &["MP_Habilidad", "MP_Avatar", "MP_Dolor", "MP_Diferenciador"],
                },
                BranchArm {
                    value: "Negocio",
                    fields: &["NEG_Producto", "NEG_Cliente", "NEG_Problema", "NEG_Infraestructura"],
                },
            ],
        }),
    },
];

static VALIDATED: Lazy<&'static [FormSchema]> = Lazy::new(|| {
    for schema in FORMS {
        schema
            .validate()
            .unwrap_or_else(|e| panic!("invalid form catalog: {e}"));
    }
    FORMS
});

/// All built-in forms, validated on first access.
pub fn catalog() -> &'static [FormSchema] {
    *VALIDATED
}

/// Look up a catalog form by slug.
pub fn find_form(slug: &str) -> Option<&'static FormSchema> {
    catalog().iter().find(|schema| schema.slug == slug)
}
