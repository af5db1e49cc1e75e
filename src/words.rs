use std::path::Path;

use anyhow::{ensure, Context};
use rand::seq::SliceRandom;
use rand::thread_rng;
use tokio::io::AsyncBufReadExt;
use tokio::{fs, io};
use tokio_stream::wrappers::LinesStream;
use tokio_stream::StreamExt;

const ADJECTIVES: &[&str] = &[
    "agile", "amber", "ancient", "arctic", "bold", "brave", "bright", "brisk", "calm", "clever",
    "cosmic", "crimson", "curious", "daring", "dusty", "eager", "electric", "elegant", "fancy",
    "fearless", "fluffy", "friendly", "gentle", "gilded", "glossy", "golden", "graceful",
    "hidden", "humble", "icy", "jolly", "keen", "lively", "lucky", "magnetic", "mellow", "misty",
    "modest", "nimble", "noble", "olive", "patient", "polished", "quiet", "rapid", "rustic",
    "scarlet", "serene", "shiny", "silent", "silver", "sleepy", "smooth", "snowy", "sturdy",
    "swift", "tangible", "tidy", "vivid", "wandering", "witty", "zealous",
];

const NOUNS: &[&str] = &[
    "albatross", "badger", "beacon", "bison", "canyon", "cedar", "comet", "coral", "cricket",
    "dolphin", "dragon", "falcon", "ferret", "fjord", "gazelle", "glacier", "harbor", "hedgehog",
    "heron", "hornet", "island", "jackal", "jaguar", "kestrel", "koala", "lagoon", "lantern",
    "lemur", "lynx", "magpie", "meadow", "meteor", "narwhal", "nebula", "ocelot", "orchid",
    "otter", "panda", "pebble", "pelican", "puffin", "quail", "quartz", "raven", "reef", "river",
    "salmon", "sparrow", "summit", "tapir", "thistle", "tiger", "toucan", "tundra", "valley",
    "viper", "walrus", "willow", "wombat", "yak", "zebra",
];

/// Word lists used to build slugs of the form `adjective-noun`.
///
/// Both lists are guaranteed non-empty and every word is plain lowercase
/// ASCII letters, so any generated slug is a valid slug.
#[derive(Debug, Clone)]
pub struct WordLists {
    adjectives: Vec<String>,
    nouns: Vec<String>,
}

impl WordLists {
    /// The word lists compiled into the binary.
    pub fn builtin() -> Self {
        WordLists {
            adjectives: ADJECTIVES.iter().map(|&s| s.to_owned()).collect(),
            nouns: NOUNS.iter().map(|&s| s.to_owned()).collect(),
        }
    }

    pub async fn load(
        adjectives_file: impl AsRef<Path>,
        nouns_file: impl AsRef<Path>,
    ) -> anyhow::Result<Self> {
        let adjectives = read_words(adjectives_file)
            .await
            .context("failed to read adjectives file")?;
        let nouns = read_words(nouns_file)
            .await
            .context("failed to read nouns file")?;

        ensure!(!adjectives.is_empty(), "adjectives file has no usable words");
        ensure!(!nouns.is_empty(), "nouns file has no usable words");

        Ok(WordLists { adjectives, nouns })
    }
}

pub fn generate_slug(words: &WordLists) -> String {
    let mut rng = thread_rng();
    let adjective = words.adjectives.choose(&mut rng).map_or("", String::as_str);
    let noun = words.nouns.choose(&mut rng).map_or("", String::as_str);
    format!("{adjective}-{noun}")
}

/// Read one word per line, keeping only lines that are a single lowercase
/// ASCII word once trimmed and lowercased.
async fn read_words(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let file = fs::File::open(path).await?;
    let words = LinesStream::new(io::BufReader::new(file).lines())
        .filter_map(Result::ok)
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase()))
        .collect()
        .await;
    Ok(words)
}
