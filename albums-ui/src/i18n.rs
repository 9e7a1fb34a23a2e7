//! Static UI text in English, French and German
//!
//! Each locale table is an exhaustive match over [`Msg`], so a message added
//! without a translation in every locale does not compile.

/// Local storage key holding the chosen locale code
pub const LOCALE_STORAGE_KEY: &str = "album-locale";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Fr,
    De,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Fr, Locale::De];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::De => "de",
        }
    }

    /// Native name shown in the language selector
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
            Locale::De => "Deutsch",
        }
    }

    pub fn from_code(code: &str) -> Option<Locale> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "fr" => Some(Locale::Fr),
            "de" => Some(Locale::De),
            _ => None,
        }
    }

    /// Like [`Locale::from_code`], falling back to English for unknown codes
    pub fn from_code_or_default(code: &str) -> Locale {
        Self::from_code(code).unwrap_or_else(|| {
            tracing::debug!("Unknown locale code {:?}, using English", code);
            Locale::default()
        })
    }
}

/// Every piece of static text the views render
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Msg {
    HeaderTitle,
    HeaderSubtitle,
    LoadingMessage,
    ErrorMessage,
    ErrorRetry,
    AddToCart,
    InCart,
    Preview,
    LanguageSelect,
    CartTitle,
    CartEmpty,
    CartTotal,
    CartClear,
    CartRemove,
    CartOpen,
    CartClose,
}

impl Msg {
    pub const ALL: [Msg; 16] = [
        Msg::HeaderTitle,
        Msg::HeaderSubtitle,
        Msg::LoadingMessage,
        Msg::ErrorMessage,
        Msg::ErrorRetry,
        Msg::AddToCart,
        Msg::InCart,
        Msg::Preview,
        Msg::LanguageSelect,
        Msg::CartTitle,
        Msg::CartEmpty,
        Msg::CartTotal,
        Msg::CartClear,
        Msg::CartRemove,
        Msg::CartOpen,
        Msg::CartClose,
    ];
}

/// Look up the text for `msg` in `locale`
pub fn t(locale: Locale, msg: Msg) -> &'static str {
    match locale {
        Locale::En => en(msg),
        Locale::Fr => fr(msg),
        Locale::De => de(msg),
    }
}

fn en(msg: Msg) -> &'static str {
    match msg {
        Msg::HeaderTitle => "Album Collection",
        Msg::HeaderSubtitle => "Discover amazing music albums",
        Msg::LoadingMessage => "Loading albums...",
        Msg::ErrorMessage => "Failed to load albums",
        Msg::ErrorRetry => "Try Again",
        Msg::AddToCart => "Add to Cart",
        Msg::InCart => "In Cart",
        Msg::Preview => "Preview",
        Msg::LanguageSelect => "Language",
        Msg::CartTitle => "Shopping Cart",
        Msg::CartEmpty => "Your cart is empty",
        Msg::CartTotal => "Total",
        Msg::CartClear => "Clear Cart",
        Msg::CartRemove => "Remove",
        Msg::CartOpen => "Open cart",
        Msg::CartClose => "Close cart",
    }
}

fn fr(msg: Msg) -> &'static str {
    match msg {
        Msg::HeaderTitle => "Collection d'Albums",
        Msg::HeaderSubtitle => "Découvrez des albums de musique incroyables",
        Msg::LoadingMessage => "Chargement des albums...",
        Msg::ErrorMessage => "Échec du chargement des albums",
        Msg::ErrorRetry => "Réessayer",
        Msg::AddToCart => "Ajouter au panier",
        Msg::InCart => "Dans le panier",
        Msg::Preview => "Aperçu",
        Msg::LanguageSelect => "Langue",
        Msg::CartTitle => "Panier",
        Msg::CartEmpty => "Votre panier est vide",
        Msg::CartTotal => "Total",
        Msg::CartClear => "Vider le panier",
        Msg::CartRemove => "Retirer",
        Msg::CartOpen => "Ouvrir le panier",
        Msg::CartClose => "Fermer le panier",
    }
}

fn de(msg: Msg) -> &'static str {
    match msg {
        Msg::HeaderTitle => "Album-Sammlung",
        Msg::HeaderSubtitle => "Entdecken Sie großartige Musikalben",
        Msg::LoadingMessage => "Alben werden geladen...",
        Msg::ErrorMessage => "Fehler beim Laden der Alben",
        Msg::ErrorRetry => "Erneut versuchen",
        Msg::AddToCart => "In den Warenkorb",
        Msg::InCart => "Im Warenkorb",
        Msg::Preview => "Vorschau",
        Msg::LanguageSelect => "Sprache",
        Msg::CartTitle => "Warenkorb",
        Msg::CartEmpty => "Ihr Warenkorb ist leer",
        Msg::CartTotal => "Gesamt",
        Msg::CartClear => "Warenkorb leeren",
        Msg::CartRemove => "Entfernen",
        Msg::CartOpen => "Warenkorb öffnen",
        Msg::CartClose => "Warenkorb schließen",
    }
}
