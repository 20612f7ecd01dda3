//! Deterministic identity generation from curated lists.
//!
//! Names, addresses and phone numbers lean Beninese/French to match
//! the Cotonou service area. All generation is deterministic (same
//! RNG seed = same identities).

use crate::rng::GeneratorRng;
use std::collections::HashSet;

/// Retry budget when hunting for an unused e-mail or serial. Past it
/// we accept the duplicate rather than fail the run.
pub const UNIQUENESS_RETRY_BUDGET: u32 = 100;

pub struct Identity;

impl Identity {
    pub fn first_name(rng: &mut GeneratorRng) -> &'static str {
        pick(rng, Self::first_names())
    }

    pub fn last_name(rng: &mut GeneratorRng) -> &'static str {
        pick(rng, Self::last_names())
    }

    pub fn full_name(rng: &mut GeneratorRng) -> String {
        format!("{} {}", Self::first_name(rng), Self::last_name(rng))
    }

    /// Benin mobile number: +229 01 XX XX XX XX.
    pub fn phone(rng: &mut GeneratorRng) -> String {
        let a = rng.in_range(40, 99);
        let b = rng.in_range(0, 99);
        let c = rng.in_range(0, 99);
        let d = rng.in_range(0, 99);
        format!("+229 01 {a:02} {b:02} {c:02} {d:02}")
    }

    /// Street-level address line inside the service area.
    pub fn address(rng: &mut GeneratorRng) -> String {
        let number = rng.in_range(1, 250);
        let street = pick(rng, Self::streets());
        let quarter = pick(rng, Self::quarters());
        format!("{number} {street}, {quarter}, Cotonou")
    }

    /// One e-mail candidate. Uniqueness is the caller's concern, see
    /// [`unique_email`].
    pub fn email_candidate(rng: &mut GeneratorRng, first: &str, last: &str) -> String {
        let domain = pick(rng, Self::email_domains());
        let tag = rng.in_range(1, 9999);
        format!("{}.{}{}@{}", ascii_slug(first), ascii_slug(last), tag, domain)
    }

    /// Short post-installation comment, French register.
    pub fn feedback_comment(rng: &mut GeneratorRng) -> String {
        pick(rng, Self::comments()).to_string()
    }

    fn first_names() -> &'static [&'static str] {
        &[
            "Abiba", "Adrien", "Albert", "Alima", "Amélie", "Anselme", "Arnaud", "Aurélie",
            "Ayaba", "Bénédicte", "Bernard", "Bienvenu", "Blandine", "Boris", "Carine",
            "Célestin", "Chantal", "Christelle", "Clément", "Colette", "Cyrille", "Damien",
            "Délphine", "Dieudonné", "Edwige", "Emmanuel", "Épiphane", "Eulalie", "Fabrice",
            "Félicité", "Fernand", "Fifamè", "Florent", "Gaston", "Geneviève", "Gérard",
            "Gisèle", "Grâce", "Hervé", "Honorine", "Hortense", "Hubert", "Inès", "Jacques",
            "Jeanne", "Joséphine", "Judicaël", "Julienne", "Justin", "Léontine", "Lucien",
            "Marcelline", "Mathias", "Mireille", "Modeste", "Nadège", "Nicodème", "Odette",
            "Parfait", "Pascaline", "Patrice", "Pélagie", "Prosper", "Raymond", "Régina",
            "Rodrigue", "Romuald", "Rosine", "Séraphin", "Sètondji", "Simone", "Sylvain",
            "Thérèse", "Ulrich", "Véronique", "Victorine", "Wilfried", "Yannick", "Yvette",
            "Zinsou",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Adjovi", "Adjaho", "Agbodjan", "Agossa", "Agossou", "Ahouansou", "Akplogan",
            "Akpovi", "Alladaye", "Amoussou", "Assogba", "Atchadé", "Avocè", "Azonhiho",
            "Bankolé", "Béhanzin", "Bio", "Boco", "Codjia", "Dagba", "Dansou", "Degbey",
            "Djossou", "Dossou", "Dossa", "Fagbohoun", "Gandaho", "Gbaguidi", "Gnacadja",
            "Gnonlonfoun", "Godonou", "Guedegbe", "Hessou", "Houédanou", "Hounkpatin",
            "Houngbédji", "Houngbo", "Hounsou", "Kakpo", "Kpadonou", "Kpossou", "Lokossou",
            "Medegan", "Mensah", "Migan", "Nounagnon", "Ogoudjobi", "Olory", "Padonou",
            "Quenum", "Sagbo", "Sessou", "Sodji", "Sossou", "Soglo", "Takpara", "Tchibozo",
            "Tognon", "Toko", "Vodounon", "Yehouessi", "Zinsè", "Zossou",
        ]
    }

    fn streets() -> &'static [&'static str] {
        &[
            "Rue des Cocotiers",
            "Boulevard de la Marina",
            "Avenue Steinmetz",
            "Rue du Commerce",
            "Avenue Clozel",
            "Rue des Palmiers",
            "Boulevard Saint-Michel",
            "Avenue de la Victoire",
            "Rue de l'Étoile Rouge",
            "Avenue Jean-Paul II",
            "Rue des Pêcheurs",
            "Carrefour Godomey",
        ]
    }

    fn quarters() -> &'static [&'static str] {
        &[
            "Akpakpa", "Cadjèhoun", "Fidjrossè", "Gbégamey", "Jéricho", "Mènontin",
            "Sainte-Rita", "Sikècodji", "Tokplégbé", "Vossa", "Zongo", "Agla",
        ]
    }

    fn email_domains() -> &'static [&'static str] {
        &["gmail.com", "yahoo.fr", "outlook.com", "hotmail.fr", "laposte.bj"]
    }

    fn comments() -> &'static [&'static str] {
        &[
            "Installation rapide et propre, merci aux techniciens.",
            "Très satisfait du débit, rien à redire.",
            "Les techniciens sont arrivés en retard mais le travail est bien fait.",
            "Bonne connexion depuis l'installation, je recommande.",
            "Le câblage aurait pu être plus discret.",
            "Service impeccable, équipe très professionnelle.",
            "Quelques coupures les premiers jours, stable depuis.",
            "Le wifi couvre mal les chambres du fond.",
            "Explications claires sur le fonctionnement de la box.",
            "Très bon accueil de l'équipe, installation soignée.",
            "Débit conforme à ce qui a été vendu.",
            "Je suis globalement satisfait mais l'attente a été longue.",
        ]
    }
}

/// Draw an e-mail nobody holds yet, retrying up to
/// [`UNIQUENESS_RETRY_BUDGET`] times. On exhaustion the duplicate is
/// returned with `true` so the caller can log and count it: degraded,
/// never silent.
pub fn unique_email(
    rng: &mut GeneratorRng,
    first: &str,
    last: &str,
    used: &mut HashSet<String>,
) -> (String, bool) {
    let mut email = Identity::email_candidate(rng, first, last);
    let mut attempts = 0;
    while used.contains(&email) && attempts < UNIQUENESS_RETRY_BUDGET {
        email = Identity::email_candidate(rng, first, last);
        attempts += 1;
    }
    let duplicate = used.contains(&email);
    used.insert(email.clone());
    (email, duplicate)
}

/// Lowercased, accent-folded, ASCII-only mailbox fragment.
fn ascii_slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter_map(|c| match c {
            'à' | 'â' | 'ä' => Some('a'),
            'é' | 'è' | 'ê' | 'ë' => Some('e'),
            'î' | 'ï' => Some('i'),
            'ô' | 'ö' | 'ò' => Some('o'),
            'ù' | 'û' | 'ü' => Some('u'),
            'ç' => Some('c'),
            c if c.is_ascii_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}

fn pick<'a>(rng: &mut GeneratorRng, options: &'a [&'a str]) -> &'a str {
    options[rng.next_u64_below(options.len() as u64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{GeneratorSlot, RngBank};

    #[test]
    fn identity_generation_is_deterministic() {
        let mut a = RngBank::new(12345).for_generator(GeneratorSlot::Client);
        let mut b = RngBank::new(12345).for_generator(GeneratorSlot::Client);
        assert_eq!(Identity::full_name(&mut a), Identity::full_name(&mut b));
        assert_eq!(Identity::phone(&mut a), Identity::phone(&mut b));
    }

    #[test]
    fn full_names_have_two_parts() {
        let mut rng = RngBank::new(7).for_generator(GeneratorSlot::Agent);
        for _ in 0..100 {
            let name = Identity::full_name(&mut rng);
            assert_eq!(name.split(' ').count(), 2, "bad name: {name}");
        }
    }

    #[test]
    fn email_local_part_is_ascii() {
        let mut rng = RngBank::new(3).for_generator(GeneratorSlot::Client);
        let email = Identity::email_candidate(&mut rng, "Sètondji", "Houngbédji");
        assert!(email.starts_with("setondji.houngbedji"), "bad email: {email}");
        assert!(email.is_ascii());
    }

    #[test]
    fn unique_email_avoids_the_registry() {
        let mut rng = RngBank::new(9).for_generator(GeneratorSlot::Client);
        let mut used = HashSet::new();
        for _ in 0..500 {
            let (email, duplicate) = unique_email(&mut rng, "Justin", "Dossou", &mut used);
            assert!(!duplicate, "retry budget should cover 500 emails");
            assert!(email.contains('@'), "bad email: {email}");
        }
        assert_eq!(used.len(), 500);
    }
}
