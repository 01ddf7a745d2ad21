//! Codelist enumerations with their canonical concept IRIs
//!
//! Every enumerated attribute of a snapshot maps one-to-one onto a
//! concept IRI in the product catalogue's controlled vocabularies. The
//! mappings are total in the enum-to-IRI direction and partial the other
//! way; an unknown IRI is the persistence boundary's mapping error, never
//! this core's.

use serde::{Deserialize, Serialize};

macro_rules! codelist {
    (
        $(#[$outer:meta])*
        $name:ident, $segment:literal {
            $( $(#[$variant_meta:meta])* $variant:ident => $local:literal ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$variant_meta])* $variant, )+
        }

        impl $name {
            /// All members, in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// The canonical concept IRI of this member
            pub fn iri(&self) -> &'static str {
                match self {
                    $( $name::$variant => concat!(
                        "https://productencatalogus.data.vlaanderen.be/id/concept/",
                        $segment, "/", $local
                    ), )+
                }
            }

            /// Look up a member by its concept IRI
            ///
            /// Returns `None` for IRIs outside this codelist; the caller
            /// (the persistence boundary) decides how to report that.
            pub fn from_iri(iri: &str) -> Option<$name> {
                $( if iri == $name::$variant.iri() { return Some($name::$variant); } )+
                None
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.iri())
            }
        }
    };
}

codelist! {
    /// The kind of public service a concept describes
    ProductType, "Type" {
        Toelating => "Toelating",
        FinancieelVoordeel => "FinancieelVoordeel",
        InfrastructuurMateriaal => "InfrastructuurMateriaal",
        Bewijs => "Bewijs",
        AdviesBegeleiding => "AdviesBegeleiding",
        Voorwerp => "Voorwerp",
        FinancieleVerplichting => "FinancieleVerplichting",
    }
}

codelist! {
    /// Who the service is aimed at
    TargetAudience, "Doelgroep" {
        Burger => "Burger",
        Onderneming => "Onderneming",
        Organisatie => "Organisatie",
        Vereniging => "Vereniging",
        VlaamseOverheid => "VlaamseOverheid",
        LokaalBestuur => "LokaalBestuur",
    }
}

codelist! {
    /// Thematic classification
    Theme, "Thema" {
        BouwenWonen => "BouwenWonen",
        BurgerOverheid => "BurgerOverheid",
        CultuurSportVrijeTijd => "CultuurSportVrijeTijd",
        EconomieWerk => "EconomieWerk",
        MilieuEnergie => "MilieuEnergie",
        MobiliteitOpenbareWerken => "MobiliteitOpenbareWerken",
        OnderwijsWetenschap => "OnderwijsWetenschap",
        WelzijnGezondheid => "WelzijnGezondheid",
    }
}

codelist! {
    /// Administrative level of the authority competent for the service
    CompetentAuthorityLevel, "BevoegdBestuursniveau" {
        Europees => "Europees",
        Federaal => "Federaal",
        Vlaams => "Vlaams",
        Provinciaal => "Provinciaal",
        Lokaal => "Lokaal",
    }
}

codelist! {
    /// Administrative level of the authority executing the service
    ExecutingAuthorityLevel, "UitvoerendBestuursniveau" {
        Europees => "Europees",
        Federaal => "Federaal",
        Vlaams => "Vlaams",
        Provinciaal => "Provinciaal",
        Lokaal => "Lokaal",
        Derden => "Derden",
    }
}

codelist! {
    /// Channel on which the service must additionally be published
    PublicationMedium, "PublicatieKanaal" {
        YourEurope => "YourEurope",
        Rechtenverkenner => "Rechtenverkenner",
    }
}

codelist! {
    /// Your Europe portal category (single-digital-gateway regulation)
    YourEuropeCategory, "YourEuropeCategorie" {
        Bedrijf => "Bedrijf",
        BedrijfIntellectueleEigendomsrechten => "BedrijfIntellectueleEigendomsrechten",
        BedrijfKredietVerzekering => "BedrijfKredietVerzekering",
        BedrijfOnlineHandelen => "BedrijfOnlineHandelen",
        BedrijfOvernameSluiting => "BedrijfOvernameSluiting",
        BedrijfPersoneel => "BedrijfPersoneel",
        BedrijfRegistratieProcedures => "BedrijfRegistratieProcedures",
        BelastingenOverigeBelastingen => "BelastingenOverigeBelastingen",
        BelastingenVennootschapsbelasting => "BelastingenVennootschapsbelasting",
        BurgerEnFamilieRechten => "BurgerEnFamilieRechten",
        BurgerEnFamilieRechtenPartners => "BurgerEnFamilieRechtenPartners",
        ConsumentenRechten => "ConsumentenRechten",
        ConsumentenRechtenVeiligheid => "ConsumentenRechtenVeiligheid",
        GezondheidszorgWoonzorgcentrum => "GezondheidszorgWoonzorgcentrum",
        OnderwijsOfStageOnderzoek => "OnderwijsOfStageOnderzoek",
        OverheidsopdrachtenDeelname => "OverheidsopdrachtenDeelname",
        ProcedurePensioneringUitkeringAanvraag => "ProcedurePensioneringUitkeringAanvraag",
        ProcedureStartenExploiterenSluitenBedrijf => "ProcedureStartenExploiterenSluitenBedrijf",
        ReizenElektronischeGegevens => "ReizenElektronischeGegevens",
        VerblijfNaturalisatie => "VerblijfNaturalisatie",
        VerblijfVerhuizing => "VerblijfVerhuizing",
        VerblijfVerkiezingen => "VerblijfVerkiezingen",
        VoertuigenVerkeersregels => "VoertuigenVerkeersregels",
        WerkEnPensioneringGaanWerken => "WerkEnPensioneringGaanWerken",
    }
}

codelist! {
    /// Editorial tag attached to a concept by the source catalogue
    ConceptTag, "ConceptTag" {
        YourEuropeVerplicht => "YourEuropeVerplicht",
        YourEuropeAanbevolen => "YourEuropeAanbevolen",
    }
}
