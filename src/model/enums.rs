//! Categorical inputs shared by both engines.
//!
//! Each enum serializes to the kebab-case token used by the intake forms,
//! and `ALL` lists the variants in declaration order so coefficient tables
//! can be checked for completeness.

/// Declares a closed set of string tokens with serde names, `as_str` and `Display`.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $token)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire token for this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use string_enum;

string_enum! {
    /// Headcount band, ordered smallest to largest.
    pub enum CompanySize {
        Micro => "1-10",
        Small => "11-50",
        Medium => "51-200",
        Large => "201-1000",
        Enterprise => "1000+",
    }
}

string_enum! {
    pub enum Industry {
        ProfessionalServices => "professional-services",
        Healthcare => "healthcare",
        Ecommerce => "ecommerce",
        Manufacturing => "manufacturing",
        Finance => "finance",
        Technology => "technology",
        Education => "education",
        Other => "other",
    }
}

string_enum! {
    /// Business function the prospect wants automated.
    pub enum AutomationArea {
        CustomerService => "customer-service",
        LeadManagement => "lead-management",
        DataEntry => "data-entry",
        Reporting => "reporting",
        Scheduling => "scheduling",
        Billing => "billing",
        Inventory => "inventory",
        HrProcesses => "hr-processes",
        Marketing => "marketing",
        Accounting => "accounting",
    }
}

string_enum! {
    pub enum PrimaryGoal {
        CostReduction => "cost-reduction",
        Efficiency => "efficiency",
        Accuracy => "accuracy",
        Scalability => "scalability",
        Compliance => "compliance",
    }
}

string_enum! {
    /// When the prospect wants results.
    pub enum Timeframe {
        Immediate => "immediate",
        ThreeMonths => "3-months",
        SixMonths => "6-months",
        TwelveMonths => "12-months",
    }
}

impl Default for Timeframe {
    fn default() -> Self {
        Self::SixMonths
    }
}

string_enum! {
    /// Coarse three-step rating used for complexity labels, pricing tiers
    /// and confidence.
    pub enum Level {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}
