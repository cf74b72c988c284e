use super::Language;

/// Greeting shown as the first assistant message of every session.
pub const WELCOME_MESSAGE: &str = "Hello! I'm here to help you report issues to your local council. \
     You can ask me in English or Bahasa Malaysia.\n\n\
     Hai! Saya di sini untuk membantu anda melaporkan masalah kepada majlis tempatan. \
     Anda boleh bertanya dalam Bahasa Inggeris atau Bahasa Malaysia.";

/// Assistant reply used when a turn fails for any reason.
pub const APOLOGY_MESSAGE: &str = "Sorry, there was an error processing your request. \
     / Maaf, terdapat ralat semasa memproses permintaan anda.";

/// Static UI strings for one language.
#[derive(Debug)]
pub struct UiStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub placeholder: &'static str,
    pub send: &'static str,
    pub examples: &'static str,
    pub example_pothole: &'static str,
    pub example_light: &'static str,
    pub example_parking: &'static str,
    pub example_trash: &'static str,
}

const EN: UiStrings = UiStrings {
    title: "Council Complaint Helper",
    subtitle: "Report issues to MBPJ, DBKL, or your local council",
    placeholder: "Type your complaint or question here...",
    send: "Send",
    examples: "Quick Examples:",
    example_pothole: "Pothole on my street",
    example_light: "Broken streetlight",
    example_parking: "Illegal parking",
    example_trash: "Uncollected garbage",
};

const MS: UiStrings = UiStrings {
    title: "Pembantu Aduan Majlis",
    subtitle: "Laporkan masalah kepada MBPJ, DBKL, atau majlis tempatan anda",
    placeholder: "Taip aduan atau soalan anda di sini...",
    send: "Hantar",
    examples: "Contoh Pantas:",
    example_pothole: "Lubang jalan di kawasan saya",
    example_light: "Lampu jalan rosak",
    example_parking: "Letak kereta haram",
    example_trash: "Sampah tak dikutip",
};

impl UiStrings {
    /// Short description of a quick example.
    pub const fn example(&self, kind: QuickActionKind) -> &'static str {
        match kind {
            QuickActionKind::Pothole => self.example_pothole,
            QuickActionKind::Streetlight => self.example_light,
            QuickActionKind::Parking => self.example_parking,
            QuickActionKind::Garbage => self.example_trash,
        }
    }
}

/// Looks up the UI string bundle for a language.
pub const fn strings(language: Language) -> &'static UiStrings {
    match language {
        Language::En => &EN,
        Language::Ms => &MS,
    }
}

/// One-click example complaints offered before the conversation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickActionKind {
    Pothole,
    Streetlight,
    Parking,
    Garbage,
}

impl QuickActionKind {
    pub const ALL: [Self; 4] = [Self::Pothole, Self::Streetlight, Self::Parking, Self::Garbage];

    /// Slash command name that triggers this action in the chat prompt.
    pub const fn command(self) -> &'static str {
        match self {
            Self::Pothole => "pothole",
            Self::Streetlight => "streetlight",
            Self::Parking => "parking",
            Self::Garbage => "garbage",
        }
    }

    pub fn from_command(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.command() == name)
    }

    /// Button label in the given language.
    pub const fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Pothole, Language::En) => "Pothole",
            (Self::Pothole, Language::Ms) => "Lubang jalan",
            (Self::Streetlight, Language::En) => "Streetlight",
            (Self::Streetlight, Language::Ms) => "Lampu jalan",
            (Self::Parking, Language::En) => "Parking",
            (Self::Parking, Language::Ms) => "Letak kereta",
            (Self::Garbage, Language::En) => "Garbage",
            (Self::Garbage, Language::Ms) => "Sampah",
        }
    }

    /// Complaint text submitted when the action is chosen.
    pub const fn query(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Pothole, Language::En) => "There's a pothole on my street",
            (Self::Pothole, Language::Ms) => "Ada lubang jalan di kawasan saya",
            (Self::Streetlight, Language::En) => "Broken streetlight near my house",
            (Self::Streetlight, Language::Ms) => "Lampu jalan rosak dekat rumah saya",
            (Self::Parking, Language::En) => "Illegal parking blocking my driveway",
            (Self::Parking, Language::Ms) => "Letak kereta haram halang jalan saya",
            (Self::Garbage, Language::En) => "Garbage not collected for 3 days",
            (Self::Garbage, Language::Ms) => "Sampah tak dikutip selama 3 hari",
        }
    }
}
