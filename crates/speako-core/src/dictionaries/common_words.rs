//! High-frequency English vocabulary.
//!
//! Words on this list never count as complex, however long they are. The set
//! covers function words, everyday nouns and verbs, and common spoken forms
//! ("gonna", "kinda") that a beginner-level speaker is expected to use.

use std::collections::HashSet;
use std::sync::LazyLock;

/// High-frequency words, lowercase.
pub static COMMON_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not",
        "on", "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they",
        "we", "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there",
        "their", "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me",
        "when", "make", "can", "like", "time", "no", "just", "him", "know", "take", "people",
        "into", "year", "your", "good", "some", "could", "them", "see", "other", "than", "then",
        "now", "look", "only", "come", "its", "over", "think", "also", "back", "after", "use",
        "two", "how", "our", "work", "first", "well", "way", "even", "new", "want", "because",
        "any", "these", "give", "day", "most", "us", "are", "is", "was", "were", "been", "has",
        "had", "does", "did", "done", "goes", "went", "gone", "got", "shall", "should", "may",
        "might", "must", "hello", "hi", "bye", "goodbye", "yes", "please", "thank", "thanks",
        "sorry", "excuse", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        "second", "third", "last", "next", "previous", "monday", "tuesday", "wednesday",
        "thursday", "friday", "saturday", "sunday", "january", "february", "march", "april",
        "june", "july", "august", "september", "october", "november", "december", "morning",
        "afternoon", "evening", "night", "week", "month", "today", "yesterday", "tomorrow",
        "later", "soon", "early", "late", "always", "usually", "often", "sometimes", "rarely",
        "never", "here", "everywhere", "nowhere", "somewhere", "anywhere", "those", "where",
        "why", "mine", "yours", "hers", "ours", "theirs", "myself", "yourself", "himself",
        "herself", "itself", "ourselves", "yourselves", "themselves", "through", "between",
        "against", "during", "without", "before", "under", "around", "among", "while",
        "although", "though", "unless", "until", "since", "very", "really", "too", "quite",
        "rather", "extremely", "totally", "completely", "absolutely", "bad", "big", "small",
        "long", "short", "old", "young", "happy", "sad", "fast", "slow", "hot", "cold", "warm",
        "cool", "hard", "soft", "easy", "difficult", "heavy", "light", "dark", "bright", "rich",
        "poor", "expensive", "cheap", "clean", "dirty", "beautiful", "ugly", "strong", "weak",
        "safe", "dangerous", "important", "unimportant", "true", "false", "right", "wrong",
        "interesting", "boring", "funny", "serious", "nice", "kind", "mean", "friendly",
        "unfriendly", "polite", "rude", "quiet", "noisy", "busy", "lazy", "lucky", "unlucky",
        "same", "different", "home", "house", "apartment", "room", "kitchen", "bathroom",
        "bedroom", "living", "dining", "garden", "garage", "school", "university", "college",
        "office", "job", "business", "company", "store", "shop", "market", "supermarket",
        "restaurant", "cafe", "bar", "hotel", "hospital", "doctor", "dentist", "pharmacy",
        "police", "station", "fire", "post", "bank", "library", "museum", "park", "cinema",
        "theatre", "movie", "film", "music", "song", "book", "newspaper", "magazine", "letter",
        "email", "message", "phone", "computer", "internet", "website", "app", "game", "sport",
        "football", "soccer", "basketball", "tennis", "swimming", "running", "walking", "car",
        "bus", "train", "plane", "bicycle", "bike", "boat", "ship", "ticket", "money", "cash",
        "card", "price", "cost", "pay", "buy", "sell", "shopping", "clothes", "shirt", "pants",
        "shoes", "hat", "coat", "dress", "skirt", "bag", "watch", "glasses", "food", "drink",
        "water", "coffee", "tea", "milk", "juice", "bread", "cheese", "meat", "fish", "chicken",
        "fruit", "vegetable", "apple", "banana", "orange", "potato", "tomato", "onion",
        "carrot", "breakfast", "lunch", "dinner", "snack", "meal", "table", "chair", "sofa",
        "bed", "desk", "door", "window", "wall", "floor", "ceiling", "roof", "lamp", "picture",
        "clock", "pen", "pencil", "paper", "notebook", "dictionary", "map", "camera", "photo",
        "video", "television", "tv", "radio", "hour", "minute", "moment", "calendar", "date",
        "weather", "sun", "moon", "star", "sky", "cloud", "rain", "snow", "wind", "storm",
        "temperature", "degree", "season", "spring", "summer", "autumn", "winter", "animal",
        "dog", "cat", "bird", "horse", "cow", "pig", "sheep", "mouse", "rat", "rabbit", "lion",
        "tiger", "elephant", "bear", "monkey", "snake", "insect", "spider", "fly", "bee",
        "mosquito", "tree", "flower", "grass", "plant", "forest", "mountain", "hill", "river",
        "lake", "ocean", "sea", "beach", "sand", "rock", "stone", "earth", "world", "country",
        "city", "town", "village", "street", "road", "building", "place", "area", "direction",
        "north", "south", "east", "west", "left", "down", "front", "center", "middle", "side",
        "top", "bottom", "inside", "outside", "near", "far", "family", "parent", "father",
        "mother", "dad", "mom", "son", "daughter", "brother", "sister", "grandfather",
        "grandmother", "grandpa", "grandma", "husband", "wife", "child", "children", "baby",
        "boy", "girl", "man", "men", "woman", "women", "person", "friend", "colleague",
        "neighbor", "guest", "visitor", "boss", "manager", "staff", "employee", "student",
        "teacher", "professor", "nurse", "officer", "driver", "pilot", "cook", "chef", "waiter",
        "waitress", "actor", "actress", "artist", "musician", "writer", "singer", "dancer",
        "athlete", "player", "fan", "audience", "crowd", "color", "red", "blue", "green",
        "yellow", "purple", "pink", "brown", "black", "white", "gray", "gold", "silver", "body",
        "head", "hair", "face", "eye", "nose", "ear", "mouth", "tooth", "teeth", "tongue",
        "lip", "neck", "shoulder", "arm", "hand", "finger", "thumb", "chest", "stomach", "leg",
        "knee", "foot", "feet", "toe", "skin", "blood", "heart", "brain", "bone", "muscle",
        "health", "sick", "ill", "fine", "pain", "hurt", "break", "cut", "burn", "cough",
        "sneeze", "flu", "fever", "medicine", "pill", "ambulance", "emergency", "help",
        "problem", "question", "answer", "idea", "thought", "memory", "dream", "hope", "wish",
        "fear", "love", "hate", "dislike", "joy", "sadness", "anger", "surprise", "fun", "joke",
        "party", "holiday", "vacation", "trip", "travel", "journey", "visit", "meeting",
        "class", "lesson", "test", "exam", "grade", "score", "pass", "fail", "study", "learn",
        "teach", "read", "write", "speak", "listen", "understand", "believe", "agree",
        "disagree", "remember", "forget", "start", "stop", "finish", "begin", "end", "continue",
        "wait", "change", "stay", "leave", "arrive", "return", "enter", "exit", "open", "close",
        "lock", "unlock", "push", "pull", "lift", "drop", "throw", "catch", "hit", "kick",
        "run", "walk", "jump", "sit", "stand", "lie", "sleep", "wake", "eat", "wash", "wear",
        "save", "spend", "lose", "find", "search", "hear", "touch", "feel", "smell", "taste",
        "smile", "laugh", "cry", "shout", "whisper", "talk", "tell", "ask", "call", "text",
        "sign", "draw", "paint", "thing", "object", "item", "stuff", "piece", "part", "bit",
        "lot", "number", "amount", "size", "shape", "weight", "length", "width", "height",
        "depth", "distance", "speed", "quality", "quantity", "type", "sort", "group", "list",
        "set", "category", "level", "rank", "position", "spot", "location", "zone", "region",
        "state", "neighborhood", "path", "track", "line", "point", "mark", "symbol", "word",
        "image", "sound", "noise", "voice", "am", "being", "hav", "havin", "gonna", "wanna",
        "gotta", "lemme", "gimme", "prob", "probs", "dunno", "kinda", "sorta", "yeah", "yep",
        "nope", "nah", "uh", "um", "er", "ah", "oh", "ok", "okay", "hey", "wow", "great",
        "awesome", "perfect", "angry", "tired", "hungry", "thirsty", "sunny", "rainy", "cloudy",
        "windy", "snowy",
    ]
    .into_iter()
    .collect()
});

/// Check if a lowercase word is on the high-frequency list.
pub fn is_common_word(word: &str) -> bool {
    COMMON_WORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everyday_words_are_common() {
        assert!(is_common_word("the"));
        assert!(is_common_word("i"));
        assert!(is_common_word("absolutely"));
        assert!(is_common_word("understand"));
    }

    #[test]
    fn academic_words_are_not_common() {
        assert!(!is_common_word("understanding"));
        assert!(!is_common_word("comprehensive"));
        assert!(!is_common_word("algorithms"));
    }
}
