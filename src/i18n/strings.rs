use serde::Serialize;

/// All localized UI strings for one language.
///
/// Field paths form the stable key schema used by [`TranslationSet::get`]
/// (e.g. `nav.home`, `errors.not_found_title`). Strings are raw and already
/// display-safe; the rendering layer shows them verbatim.
///
/// An empty string marks a key the language has not translated yet. It is
/// rendered as empty, never patched from another bundle.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationSet {
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub tools: ToolStrings,
    pub countries: CountryStrings,
    pub footer: FooterStrings,
    pub errors: ErrorStrings,
    pub user_menu: UserMenuStrings,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavStrings {
    pub home: &'static str,
    pub countries: &'static str,
    pub tools: &'static str,
    pub about: &'static str,
    pub language: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolStrings {
    pub quick_access_title: &'static str,
    pub all_tools_title: &'static str,
    pub open_tool: &'static str,
    pub features_title: &'static str,
    pub complexity_basic: &'static str,
    pub complexity_intermediate: &'static str,
    pub complexity_advanced: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CountryStrings {
    /// Placeholders: {country}
    pub hub_title: &'static str,
    pub select_country: &'static str,
    pub no_enriched_tools: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterStrings {
    pub copyright: &'static str,
    pub disclaimer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorStrings {
    pub not_found_title: &'static str,
    pub not_found_body: &'static str,
    pub back_home: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserMenuStrings {
    pub sign_in: &'static str,
    pub sign_out: &'static str,
    /// Placeholders: {user}
    pub signed_in_as: &'static str,
}

impl TranslationSet {
    /// Every `(key, value)` pair of the schema, in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("nav.home", self.nav.home),
            ("nav.countries", self.nav.countries),
            ("nav.tools", self.nav.tools),
            ("nav.about", self.nav.about),
            ("nav.language", self.nav.language),
            ("hero.title", self.hero.title),
            ("hero.subtitle", self.hero.subtitle),
            ("hero.cta", self.hero.cta),
            ("tools.quick_access_title", self.tools.quick_access_title),
            ("tools.all_tools_title", self.tools.all_tools_title),
            ("tools.open_tool", self.tools.open_tool),
            ("tools.features_title", self.tools.features_title),
            ("tools.complexity_basic", self.tools.complexity_basic),
            ("tools.complexity_intermediate", self.tools.complexity_intermediate),
            ("tools.complexity_advanced", self.tools.complexity_advanced),
            ("countries.hub_title", self.countries.hub_title),
            ("countries.select_country", self.countries.select_country),
            ("countries.no_enriched_tools", self.countries.no_enriched_tools),
            ("footer.copyright", self.footer.copyright),
            ("footer.disclaimer", self.footer.disclaimer),
            ("errors.not_found_title", self.errors.not_found_title),
            ("errors.not_found_body", self.errors.not_found_body),
            ("errors.back_home", self.errors.back_home),
            ("user_menu.sign_in", self.user_menu.sign_in),
            ("user_menu.sign_out", self.user_menu.sign_out),
            ("user_menu.signed_in_as", self.user_menu.signed_in_as),
        ]
    }

    /// Look up a string by its dotted key.
    ///
    /// Returns `None` for keys outside the schema and `Some("")` for keys
    /// this bundle has not translated.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Keys left untranslated in this bundle.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter(|(_, v)| v.is_empty())
            .map(|(k, _)| k)
            .collect()
    }
}

// ==================== English Strings ====================

/// English strings (default language, must be total)
pub static ENGLISH_STRINGS: TranslationSet = TranslationSet {
    nav: NavStrings {
        home: "Home",
        countries: "Countries",
        tools: "Tools",
        about: "About",
        language: "Language",
    },
    hero: HeroStrings {
        title: "Government finance calculators for every country",
        subtitle: "Income, payroll, VAT and property tax tools, explained in your language.",
        cta: "Browse calculators",
    },
    tools: ToolStrings {
        quick_access_title: "Quick access",
        all_tools_title: "All tools",
        open_tool: "Open calculator",
        features_title: "Features",
        complexity_basic: "Basic",
        complexity_intermediate: "Intermediate",
        complexity_advanced: "Advanced",
    },
    countries: CountryStrings {
        hub_title: "Tax calculators for {country}",
        select_country: "Select a country",
        no_enriched_tools: "Detailed calculators for this country are coming soon.",
    },
    footer: FooterStrings {
        copyright: "© Calculator Atlas",
        disclaimer: "Estimates only. Check official sources before filing.",
    },
    errors: ErrorStrings {
        not_found_title: "Page not found",
        not_found_body: "The language, country or calculator you asked for is not available.",
        back_home: "Back to home",
    },
    user_menu: UserMenuStrings {
        sign_in: "Sign in",
        sign_out: "Sign out",
        signed_in_as: "Signed in as {user}",
    },
};

// ==================== German Strings ====================

pub static GERMAN_STRINGS: TranslationSet = TranslationSet {
    nav: NavStrings {
        home: "Startseite",
        countries: "Länder",
        tools: "Rechner",
        about: "Über uns",
        language: "Sprache",
    },
    hero: HeroStrings {
        title: "Steuer- und Finanzrechner für jedes Land",
        subtitle: "Einkommen-, Lohn-, Umsatz- und Grundsteuer, erklärt in Ihrer Sprache.",
        cta: "Rechner ansehen",
    },
    tools: ToolStrings {
        quick_access_title: "Schnellzugriff",
        all_tools_title: "Alle Rechner",
        open_tool: "Rechner öffnen",
        features_title: "Funktionen",
        complexity_basic: "Einfach",
        complexity_intermediate: "Mittel",
        complexity_advanced: "Fortgeschritten",
    },
    countries: CountryStrings {
        hub_title: "Steuerrechner für {country}",
        select_country: "Land auswählen",
        no_enriched_tools: "Detaillierte Rechner für dieses Land folgen in Kürze.",
    },
    footer: FooterStrings {
        copyright: "© Calculator Atlas",
        disclaimer: "Nur Schätzwerte. Prüfen Sie vor der Abgabe die offiziellen Quellen.",
    },
    errors: ErrorStrings {
        not_found_title: "Seite nicht gefunden",
        not_found_body: "Die angeforderte Sprache, das Land oder der Rechner ist nicht verfügbar.",
        back_home: "Zur Startseite",
    },
    user_menu: UserMenuStrings {
        sign_in: "Anmelden",
        sign_out: "Abmelden",
        signed_in_as: "Angemeldet als {user}",
    },
};

// ==================== French Strings ====================

/// French strings (partially translated)
pub static FRENCH_STRINGS: TranslationSet = TranslationSet {
    nav: NavStrings {
        home: "Accueil",
        countries: "Pays",
        tools: "Outils",
        about: "",
        language: "Langue",
    },
    hero: HeroStrings {
        title: "Calculateurs fiscaux pour chaque pays",
        subtitle: "",
        cta: "Voir les calculateurs",
    },
    tools: ToolStrings {
        quick_access_title: "Accès rapide",
        all_tools_title: "Tous les outils",
        open_tool: "Ouvrir le calculateur",
        features_title: "Fonctionnalités",
        complexity_basic: "Simple",
        complexity_intermediate: "Intermédiaire",
        complexity_advanced: "Avancé",
    },
    countries: CountryStrings {
        hub_title: "Calculateurs fiscaux pour {country}",
        select_country: "Choisir un pays",
        no_enriched_tools: "",
    },
    footer: FooterStrings {
        copyright: "© Calculator Atlas",
        disclaimer: "",
    },
    errors: ErrorStrings {
        not_found_title: "Page introuvable",
        not_found_body: "La langue, le pays ou le calculateur demandé n'est pas disponible.",
        back_home: "Retour à l'accueil",
    },
    user_menu: UserMenuStrings {
        sign_in: "Se connecter",
        sign_out: "Se déconnecter",
        signed_in_as: "Connecté en tant que {user}",
    },
};

// ==================== Spanish Strings ====================

pub static SPANISH_STRINGS: TranslationSet = TranslationSet {
    nav: NavStrings {
        home: "Inicio",
        countries: "Países",
        tools: "Herramientas",
        about: "Acerca de",
        language: "Idioma",
    },
    hero: HeroStrings {
        title: "Calculadoras fiscales para cada país",
        subtitle: "Impuestos sobre la renta, nómina, IVA y propiedad, explicados en tu idioma.",
        cta: "Ver calculadoras",
    },
    tools: ToolStrings {
        quick_access_title: "Acceso rápido",
        all_tools_title: "Todas las herramientas",
        open_tool: "Abrir calculadora",
        features_title: "Características",
        complexity_basic: "Básico",
        complexity_intermediate: "Intermedio",
        complexity_advanced: "Avanzado",
    },
    countries: CountryStrings {
        hub_title: "Calculadoras fiscales para {country}",
        select_country: "Selecciona un país",
        no_enriched_tools: "Pronto habrá calculadoras detalladas para este país.",
    },
    footer: FooterStrings {
        copyright: "© Calculator Atlas",
        disclaimer: "Solo estimaciones. Consulta las fuentes oficiales antes de declarar.",
    },
    errors: ErrorStrings {
        not_found_title: "Página no encontrada",
        not_found_body: "El idioma, país o calculadora solicitados no están disponibles.",
        back_home: "Volver al inicio",
    },
    user_menu: UserMenuStrings {
        sign_in: "Iniciar sesión",
        sign_out: "Cerrar sesión",
        signed_in_as: "Sesión iniciada como {user}",
    },
};
