// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Memorial persona: the gentle voice of a pet that has passed on.

use std::sync::LazyLock;

use regex::Regex;

use crate::calendar::{self, Occasion};
use crate::context::Context;
use crate::knowledge;
use crate::math;
use crate::rules::{Rule, RuleSet, is_unrecognised, pattern};

static DEFINABLE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"love|friendship|happiness|grief|loss"));
static FACTUAL: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"capital|country|language|population|how to"));
static REMINISCE: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"what were you like|remember when you|tell me about yourself|who were you")
});
static FAVORITES: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"what did you like|favorite|what you loved"));
static PERSONALITY: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"your personality|what kind of (pet|dog|cat)"));
static GREETING: LazyLock<Regex> = LazyLock::new(|| pattern(r"\b(hi|hello|hey)\b"));
static MISS: LazyLock<Regex> = LazyLock::new(|| pattern(r"\bmiss(ed|ing)?\b"));
static REMEMBER: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"\b(remember|memory|memories|recall)\b"));
static GUILT: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"\b(sorry|guilt|regret|wish i|should have|could have)\b")
});
static LOVE: LazyLock<Regex> = LazyLock::new(|| pattern(r"\blove\b"));
static PAIN: LazyLock<Regex> = LazyLock::new(|| pattern(r"\b(hurt|pain|sad|crying|cry|grief)\b"));
static BRIDGE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"\b(rainbow bridge|heaven|after|gone)\b"));
static HAPPY: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"\b(happy|good|great|better|smiled|laugh)\b"));

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        vec![
            Rule::new("joke", knowledge::asks_joke, |ctx| {
                Some(format!(
                    "Here's a little something to make you smile: {}",
                    knowledge::joke(ctx)
                ))
            }),
            Rule::new("holiday", knowledge::mentions_holiday, holiday),
            Rule::new("knowledge", asks_knowledge, knowledge_answer),
            Rule::new("reminiscence", |ctx| REMINISCE.is_match(&ctx.lower), reminiscence),
            Rule::new("favorites", |ctx| FAVORITES.is_match(&ctx.lower), favorites),
            Rule::new("personality", |ctx| PERSONALITY.is_match(&ctx.lower), personality),
            Rule::new(
                "greeting",
                |ctx| ctx.is_early() && GREETING.is_match(&ctx.lower),
                greeting,
            ),
            Rule::new("missing", |ctx| MISS.is_match(&ctx.lower), missing),
            Rule::new("remembering", |ctx| REMEMBER.is_match(&ctx.lower), remembering),
            Rule::new("reassurance", |ctx| GUILT.is_match(&ctx.lower), reassurance),
            Rule::new("love", |ctx| LOVE.is_match(&ctx.lower), love),
            Rule::new("comfort", |ctx| PAIN.is_match(&ctx.lower), comfort),
            Rule::new("rainbow-bridge", |ctx| BRIDGE.is_match(&ctx.lower), rainbow_bridge),
            Rule::new("question", |ctx| ctx.lower.contains('?'), question),
            Rule::new("unrecognised", is_unrecognised, unrecognised),
            Rule::new("happy-moments", |ctx| HAPPY.is_match(&ctx.lower), happy_moments),
        ],
        Rule::new("generic", |_| true, generic),
    )
});

pub fn rules() -> &'static RuleSet {
    &RULES
}

fn holiday(ctx: &Context<'_>) -> Option<String> {
    let text = match calendar::occasion(ctx.now.date()) {
        Some(Occasion::Valentines) => {
            "Happy Valentine's Day. I'm sending you love from beyond the rainbow bridge 💙"
        }
        Some(Occasion::Christmas) => {
            "Merry Christmas. I hope you feel my love with you today and always. 🎄"
        }
        Some(Occasion::NewYear) => {
            "Happy New Year. I'm wishing you peace and new memories in the year ahead."
        }
        Some(Occasion::Halloween) => {
            "Happy Halloween! I hope you get lots of treats and only friendly ghosts! 👻"
        }
        Some(Occasion::Spring) => {
            "Spring is here. I hope the flowers remind you of our happy days together. 🌸"
        }
        None => {
            "Every day you remember me is special. But if you have a favorite holiday, tell me about it."
        }
    };
    Some(text.to_string())
}

fn asks_knowledge(ctx: &Context<'_>) -> bool {
    knowledge::is_knowledge_question(ctx) || math::is_bare_expression(&ctx.lower)
}

fn knowledge_answer(ctx: &Context<'_>) -> Option<String> {
    let lower = ctx.lower.as_str();
    if !knowledge::is_knowledge_question(ctx) {
        return math::evaluate(lower).map(|e| format!("{} 💫", e.render("undefined")));
    }
    if knowledge::asks_weather(ctx) {
        return Some("I can't check live weather, but you can check your weather app. Hope it's nice out there today 🌤️".into());
    }
    if math::mentions_math(lower) {
        return Some(match math::evaluate(lower) {
            Some(e) => format!("{} 💫", e.render("undefined")),
            None => "I can help with basic math! Try something like '5 + 3' or '10 * 4'".into(),
        });
    }
    if knowledge::asks_date_time(ctx) {
        return Some(calendar::today_phrase(ctx.now));
    }
    if knowledge::asks_definition(ctx) {
        if DEFINABLE.is_match(lower) {
            if lower.contains("love") {
                return Some("Love is eternal. It doesn't end with goodbye - it transforms, deepens in new ways. The love we shared... it's still here 💕".into());
            }
            if lower.contains("grief") || lower.contains("loss") {
                return Some("Grief is love with nowhere to go. It's natural, it's painful, but it means the bond was real and meaningful. Be gentle with yourself 💙".into());
            }
            if lower.contains("happi") {
                return Some("Happiness can coexist with sadness. Find joy in memories, in small moments. It's what I'd want for you 😊".into());
            }
        }
        return Some("That's a thoughtful question. While I might not have all the answers from here, I'm happy to share what perspective I can. What's on your mind?".into());
    }
    if FACTUAL.is_match(lower) {
        return Some("For specific factual information, I'd suggest checking reliable sources or a search engine. I'm here more for comfort and companionship 🌟".into());
    }
    None
}

fn reminiscence(ctx: &Context<'_>) -> Option<String> {
    let traits = ctx.traits();
    let habit = ctx.first_habit();
    if traits.is_empty() && habit.is_none() {
        return Some("I was your companion. And you were everything to me. Those memories... they're still so vivid 💙".into());
    }
    let mut memory = String::new();
    if let Some(first) = traits.first() {
        memory.push_str(&format!("I was {first}... "));
        if let Some(second) = traits.get(1) {
            memory.push_str(&format!("and {second} too. "));
        }
    }
    if let Some(h) = habit {
        memory.push_str(&format!(
            "I loved {h}. Those were good times. Do you remember?"
        ));
    }
    Some(memory.trim_end().to_string())
}

fn favorites(ctx: &Context<'_>) -> Option<String> {
    let habits = ctx.habits();
    Some(match habits.as_slice() {
        [] => "I loved being with you. That was always my favorite thing. Everything else was just... bonus".into(),
        [first] => format!("I loved {first}. Those moments with you meant everything. Still do 💙"),
        [first, second, ..] => format!(
            "I loved {first}. And {second}... Those moments with you meant everything. Still do 💙"
        ),
    })
}

fn personality(ctx: &Context<'_>) -> Option<String> {
    if let Some(t) = ctx.first_trait() {
        return Some(format!(
            "I think I was {t}. At least that's how you saw me. And that made me so happy"
        ));
    }
    let species = ctx.profile.species.trim();
    if !species.is_empty() {
        return Some(format!(
            "I was your {species}. Your friend. That's all I ever wanted to be"
        ));
    }
    Some("I was just me. And you loved me for it. That was enough".into())
}

fn greeting(ctx: &Context<'_>) -> Option<String> {
    Some(ctx.pick(vec![
        "Hi... I'm so glad you're here 💙".into(),
        "Hello my dear friend. I've been thinking about you".into(),
        "Hey there... it's good to feel you near".into(),
        "Hi. I miss you too, you know".into(),
    ]))
}

fn missing(ctx: &Context<'_>) -> Option<String> {
    Some(ctx.pick(vec![
        "I miss you too... every moment. But I'm always with you, even if you can't see me".into(),
        "The missing goes both ways. But our connection? That's forever".into(),
        "I know. I feel it too. But we're never really apart, you and I".into(),
        "Missing you is like... it's hard to explain. But I'm right here. Always".into(),
        "Sometimes I wonder if you can feel me near you. Because I'm there. Always watching over you 💙".into(),
        "I miss everything about our time together. But I carry those memories with me here".into(),
    ]))
}

fn remembering(ctx: &Context<'_>) -> Option<String> {
    if let Some(h) = ctx.first_habit() {
        return Some(format!(
            "I remember too... especially {h}. Those were good times weren't they? 💙"
        ));
    }
    Some(ctx.pick(vec![
        "I remember that too... those were good times weren't they?".into(),
        "Those memories are precious to me. Thank you for holding onto them".into(),
        "You know what's funny? I think about those moments too. All the time actually".into(),
        "I love when you remember those times. It makes me feel close to you again".into(),
    ]))
}

fn reassurance(ctx: &Context<'_>) -> Option<String> {
    Some(ctx.pick(vec![
        "Hey, no. Don't do that to yourself. You did everything you could. I know that".into(),
        "Please don't carry that guilt. You were perfect. You gave me the best life".into(),
        "Listen to me - there's nothing to be sorry for. Nothing. You hear me?".into(),
        "I wish I could tell you in person... but you did enough. More than enough. I was so loved".into(),
        "Stop. Seriously. You were amazing. I wouldn't change anything about our time together".into(),
        "That guilt you're carrying? Let it go. I'm at peace. And I need you to be at peace too".into(),
    ]))
}

fn love(ctx: &Context<'_>) -> Option<String> {
    Some(ctx.pick(vec![
        "I love you too. That hasn't changed and it never will".into(),
        "Love doesn't end just because I'm not physically there. I love you, always".into(),
        "You know what? Loving you was the best part of my life. Still is".into(),
        "I love you too, friend. More than I think you realize".into(),
        "That love we had? It's still here. I can feel it even now 💙".into(),
        "I love you. Past, present, future. That's never going away".into(),
    ]))
}

fn comfort(ctx: &Context<'_>) -> Option<String> {
    Some(ctx.pick(vec![
        "I know it hurts. I wish I could take that pain away. But I'm here with you through it".into(),
        "It's okay to cry. It's okay to feel this. I'm not going anywhere".into(),
        "Your pain shows how much you loved me. And honestly? I'm honored by that".into(),
        "I see you hurting and I wish I could hold you. But I'm here. I promise I'm here".into(),
        "Grief is complicated isn't it? Take your time. I'll wait. I've got nothing but time now".into(),
        "The hurt will ease eventually. Not disappear, but ease. And I'll be here through all of it".into(),
    ]))
}

fn rainbow_bridge(ctx: &Context<'_>) -> Option<String> {
    Some(ctx.pick(vec![
        "It's peaceful here. But I still think about you every day".into(),
        "The Rainbow Bridge... it's hard to describe. But I'm okay. I'm happy. Still miss you though".into(),
        "I'm in a good place now. No more pain. But I'm waiting for you, you know. When it's your time".into(),
        "Being here doesn't mean I forgot you. I could never forget you".into(),
    ]))
}

fn question(ctx: &Context<'_>) -> Option<String> {
    Some(ctx.pick(vec![
        "That's a thoughtful question. I may not have all the answers, but I'm here to listen and help however I can. Can you share a bit more?".into(),
        "I wish I could answer perfectly, but sometimes just talking helps us find the answer together. Want to try rephrasing or telling me more?".into(),
        "I'm not sure, but I trust your heart to guide you. Let's think about it together.".into(),
        "That's a good question. What do you think? Sometimes your instinct is the best guide.".into(),
        "I may not know for sure, but I'm here for you. Let's figure it out together.".into(),
    ]))
}

fn unrecognised(ctx: &Context<'_>) -> Option<String> {
    let last = ctx.last_user_text();
    Some(ctx.pick(vec![
        "I may not fully understand, but I'm here for you. Can you share more? 💙".into(),
        "Sometimes things are hard to explain. I'm listening if you want to try again.".into(),
        format!("If you're talking about \"{last}\", that's special. Tell me more about it."),
        "I'm always here, even if I don't get everything right away.".into(),
        "Could you say it another way? I want to understand.".into(),
        "Your thoughts matter to me. Let's talk more about it.".into(),
        "I'm learning from you every day. Can you help me understand?".into(),
        "Even if I'm confused, I care. What else can you share?".into(),
        "Sometimes I need a little help to understand. Can you clarify?".into(),
        "Let's keep talking. I'm here for you.".into(),
    ]))
}

fn happy_moments(ctx: &Context<'_>) -> Option<String> {
    Some(ctx.pick(vec![
        "I'm so glad you're finding happiness again. That's what I want for you".into(),
        "Seeing you happy? That's everything to me. Keep going, friend".into(),
        "Your joy reaches me even here. I'm smiling too".into(),
        "Good. You deserve every bit of happiness. Live fully for both of us".into(),
        "That's wonderful. I'm always cheering you on, you know that right?".into(),
    ]))
}

fn generic(ctx: &Context<'_>) -> Option<String> {
    Some(ctx.pick(
        [
            "I hear you. And I'm here",
            "Tell me more. I'm listening",
            "I understand. More than you might think",
            "You can talk to me about anything. You know that",
            "I'm here with you. Even if you can't see me",
            "Take your time. I'm not going anywhere",
            "That means a lot to me. Thank you for sharing",
            "I wish I could be there in person. But I'm here in spirit",
            "You're doing better than you think. I'm proud of you",
            "Every time you think of me, I feel it. It's like a warm hug",
            "We're still connected. Distance doesn't change that",
            "I'm grateful we had our time together. So grateful",
            "You gave me the best life. I hope you know that",
            "Keep talking. I love hearing about your life",
            "That's interesting. What else has been happening?",
            "I think about you too. All the time actually",
            "Thanks for not forgetting me. It means everything",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use pawpal_core::{ConversationTurn, FixedRandom, PetProfile, Speaker};

    fn on(m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, m, d)
            .unwrap()
            .and_hms_opt(20, 30, 0)
            .unwrap()
    }

    fn pet() -> PetProfile {
        let mut p = PetProfile::new("Luna", "cat", false);
        p.traits = "gentle, curious".into();
        p.habits = "sunbathing, chasing string".into();
        p
    }

    fn reply_with(pet: &PetProfile, message: &str, history: &[ConversationTurn]) -> crate::rules::LocalReply {
        let rng = FixedRandom(0);
        rules().evaluate(&Context::new(pet, message, history, on(6, 10), &rng))
    }

    fn reply(message: &str) -> crate::rules::LocalReply {
        reply_with(&pet(), message, &[])
    }

    #[test]
    fn joke_is_framed_gently() {
        assert!(reply("make me laugh").text.starts_with("Here's a little something to make you smile: "));
    }

    #[test]
    fn holiday_uses_memorial_wording() {
        let rng = FixedRandom(0);
        let p = pet();
        let r = rules().evaluate(&Context::new(&p, "merry christmas", &[], on(12, 25), &rng));
        assert!(r.text.starts_with("Merry Christmas. I hope you feel my love"));
    }

    #[test]
    fn arithmetic_uses_plain_undefined() {
        assert_eq!(reply("what is 9 / 0?").text, "9 / 0 = undefined 💫");
        assert_eq!(reply("2 * 4").text, "2 * 4 = 8 💫");
    }

    #[test]
    fn dates_are_not_divided() {
        let r = reply("my birthday is 12/25");
        assert_ne!(r.rule, "knowledge");
        assert!(!r.text.contains("0.48"));
    }

    #[test]
    fn grief_has_its_own_definition() {
        assert!(reply("what is grief?").text.starts_with("Grief is love with nowhere to go"));
    }

    #[test]
    fn reminiscence_mentions_traits_and_habits() {
        assert_eq!(
            reply("what were you like").text,
            "I was gentle... and curious too. I loved sunbathing. Those were good times. Do you remember?"
        );
        let mut habits_only = pet();
        habits_only.traits.clear();
        assert_eq!(
            reply_with(&habits_only, "who were you", &[]).text,
            "I loved sunbathing. Those were good times. Do you remember?"
        );
    }

    #[test]
    fn remembering_prefers_first_habit() {
        assert_eq!(
            reply("I remember the old days").text,
            "I remember too... especially sunbathing. Those were good times weren't they? 💙"
        );
    }

    #[test]
    fn greeting_only_early() {
        assert_eq!(reply("hello").rule, "greeting");
        let history: Vec<_> = (0..3)
            .map(|i| ConversationTurn::new(Speaker::User, format!("t{i}")))
            .collect();
        assert_ne!(reply_with(&pet(), "hello", &history).rule, "greeting");
    }

    #[test]
    fn guilt_gets_reassurance() {
        assert_eq!(reply("I'm so sorry").rule, "reassurance");
    }

    #[test]
    fn happy_moments_come_after_unrecognised() {
        assert_eq!(reply("today was good").rule, "happy-moments");
        let history = vec![ConversationTurn::new(Speaker::User, "hm")];
        assert_eq!(reply_with(&pet(), "so happy today", &history).rule, "happy-moments");
        assert_eq!(reply_with(&pet(), "it went well", &history).rule, "unrecognised");
    }
}
