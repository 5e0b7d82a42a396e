//! Authored symptom taxonomy and sentence templates.

/// Canonical label → colloquial phrases.
pub(crate) const SYMPTOMS: &[(&str, &[&str])] = &[
    (
        "Headache",
        &[
            "head hurts",
            "pounding head",
            "migraine",
            "headache",
            "my head is killing me",
            "throbbing in my head",
            "pain in my skull",
            "splitting headache",
            "dizzy head",
        ],
    ),
    (
        "Fever",
        &[
            "high temp",
            "fever",
            "burning up",
            "feeling hot",
            "chills",
            "temperature is high",
            "shivering",
            "hot forehead",
            "feverish",
        ],
    ),
    (
        "Nausea",
        &[
            "feel sick",
            "want to vomit",
            "nausea",
            "queasy",
            "stomach upset",
            "feel like throwing up",
            "sick to my stomach",
            "urge to vomit",
        ],
    ),
    (
        "Cough",
        &[
            "coughing",
            "dry cough",
            "hacking cough",
            "coughing up phlegm",
            "bad cough",
            "can't stop coughing",
            "tickle in throat",
        ],
    ),
    (
        "Fatigue",
        &[
            "tired",
            "exhausted",
            "no energy",
            "worn out",
            "fatigue",
            "feeling weak",
            "drained",
            "sleepy all the time",
            "lethargic",
        ],
    ),
    (
        "Sore Throat",
        &[
            "throat hurts",
            "pain when swallowing",
            "sore throat",
            "scratchy throat",
            "throat is raw",
            "burning throat",
        ],
    ),
    (
        "Shortness of Breath",
        &[
            "can't breathe",
            "short of breath",
            "hard to breathe",
            "gasping for air",
            "breathless",
            "winded easily",
            "chest feels tight",
        ],
    ),
    (
        "Joint Pain",
        &[
            "knees hurt",
            "elbows ache",
            "joint pain",
            "stiff joints",
            "aching bones",
            "pain in my joints",
            "arthritis pain",
        ],
    ),
    (
        "Skin Rash",
        &[
            "itchy skin",
            "red spots",
            "rash",
            "hives",
            "skin breakout",
            "itchy bumps",
            "redness on skin",
        ],
    ),
    (
        "Abdominal Pain",
        &[
            "stomach ache",
            "belly pain",
            "abdominal pain",
            "tummy hurts",
            "cramps",
            "pain in my gut",
            "stomach cramps",
        ],
    ),
    (
        "Back Pain",
        &[
            "back hurts",
            "lower back pain",
            "spine hurts",
            "stiff back",
            "backache",
            "pain in my back",
            "pulled a muscle in my back",
        ],
    ),
    (
        "Chest Pain",
        &[
            "chest hurts",
            "pain in chest",
            "tight chest",
            "pressure in chest",
            "heart hurts",
            "sharp pain in chest",
        ],
    ),
    (
        "Dizziness",
        &[
            "dizzy",
            "lightheaded",
            "room is spinning",
            "vertigo",
            "feeling faint",
            "unsteady",
        ],
    ),
    (
        "Insomnia",
        &[
            "can't sleep",
            "trouble sleeping",
            "staying awake",
            "insomnia",
            "haven't slept",
            "tossing and turning",
        ],
    ),
    (
        "Anxiety",
        &[
            "anxious",
            "nervous",
            "panicking",
            "panic attack",
            "worried sick",
            "stress",
            "feeling on edge",
        ],
    ),
    (
        "Depression",
        &[
            "feeling sad",
            "depressed",
            "no motivation",
            "feeling down",
            "hopeless",
            "crying a lot",
        ],
    ),
    (
        "Earache",
        &[
            "ear hurts",
            "pain in ear",
            "earache",
            "blocked ear",
            "ringing in ears",
        ],
    ),
    (
        "Eye Pain",
        &[
            "eye hurts",
            "pain in eye",
            "blurry vision",
            "itchy eyes",
            "red eyes",
            "vision problems",
        ],
    ),
    (
        "Toothache",
        &[
            "tooth hurts",
            "toothache",
            "pain in tooth",
            "sensitive teeth",
            "gum pain",
        ],
    ),
    (
        "Acne",
        &["pimples", "zits", "acne", "breakouts", "spots on face"],
    ),
    (
        "Allergies",
        &[
            "sneezing",
            "runny nose",
            "allergies",
            "hay fever",
            "allergic reaction",
        ],
    ),
    (
        "Diarrhea",
        &[
            "runny tummy",
            "diarrhea",
            "loose stools",
            "upset stomach",
            "frequent bathroom trips",
        ],
    ),
    (
        "Constipation",
        &[
            "constipated",
            "can't poop",
            "hard stool",
            "backed up",
            "constipation",
        ],
    ),
    (
        "Burn",
        &[
            "burned myself",
            "skin burn",
            "sunburn",
            "touched something hot",
            "minor burn",
        ],
    ),
    (
        "Cut",
        &["cut my finger", "bleeding", "cut myself", "scratch", "wound"],
    ),
    (
        "Non-Medical",
        &[
            "hello",
            "hi there",
            "how are you",
            "good morning",
            "what is your name",
            "tell me a joke",
            "i like pizza",
            "what is the weather",
            "who are you",
            "do you like cars",
            "i am happy",
            "goodbye",
            "thanks",
            "thank you",
            "cool",
            "nice",
            "okay",
            "random text",
            "testing",
        ],
    ),
];

pub(crate) const TEMPLATES: &[&str] = &[
    "{phrase}",
    "I have {phrase}",
    "I am experiencing {phrase}",
    "I've been having {phrase}",
    "Suffering from {phrase}",
    "My problem is {phrase}",
    "It feels like {phrase}",
    "Lately I have {phrase}",
    "Complaining of {phrase}",
    "Dealing with {phrase}",
    "Severe {phrase}",
    "Mild {phrase}",
    "Chronic {phrase}",
    "Sudden {phrase}",
    "Help, I have {phrase}",
    "Doctor, I have {phrase}",
    "Can you help with {phrase}?",
    "I think I have {phrase}",
    "It started as a {phrase} but now it's worse",
    "Do you think {phrase} is serious?",
    "Suffering from {phrase} for 3 days",
    "I have been dealing with {phrase} for a week",
    "Is {phrase} something to worry about?",
    "My {phrase} is getting unbearable",
    "I woke up with {phrase}",
    "Constant {phrase} keeps me awake",
    "I can't shake this {phrase}",
    "Not sure if it is {phrase} or something else",
    "Feeling of {phrase} throughout the day",
    "Recurring {phrase} every morning",
    "Painful {phrase} on my left side",
    "Please tell me what to do about {phrase}",
];
