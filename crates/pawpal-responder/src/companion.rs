// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Companion persona: a playful, helpful friend.
//!
//! Rule order:
//! joke, holiday, knowledge (weather, arithmetic, date/time, definition,
//! how-to, factual), name, kind, likes, who-are-you, personality,
//! greeting (early in the conversation), mood-check, activity, love,
//! sadness, happiness, play, food, question, unrecognised, work, tired,
//! then the generic pool.

use std::sync::LazyLock;

use regex::Regex;

use crate::calendar::{self, Occasion};
use crate::context::Context;
use crate::knowledge;
use crate::math;
use crate::rules::{Rule, RuleSet, is_unrecognised, pattern};

const ZERO_DIVISION: &str = "undefined (division by zero)";

static HOW_TO: LazyLock<Regex> = LazyLock::new(|| pattern(r"how (do|to|can)"));
static FACTUAL: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"capital|country|language|population|president"));
static NAME: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"what('s| is|s| are) (your |you |ur )?(name|called)"));
static KIND: LazyLock<Regex> = LazyLock::new(|| pattern(r"what (kind|type|species|breed)"));
static LIKES: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"what (do you|are you) like|your favorite|what you like"));
static WHO: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"who are you|tell me about yourself|describe yourself"));
static PERSONALITY: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"your personality|what are you like|how would you describe"));
static GREETING: LazyLock<Regex> = LazyLock::new(|| pattern(r"\b(hi|hello|hey|sup|yo|wassup)\b"));
static MOOD_CHECK: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"how (are|r) (you|u)|how('re| are) you"));
static ACTIVITY: LazyLock<Regex> = LazyLock::new(|| pattern(r"what.*(doing|up to)"));
static LOVE: LazyLock<Regex> = LazyLock::new(|| pattern(r"love (you|u|ya)|luv (you|u)"));
static SAD: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"\b(sad|upset|depressed|down|terrible|awful|crying|cry|hurt)\b")
});
static HAPPY: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"\b(happy|excited|great|amazing|awesome|good news|fantastic)\b")
});
static PLAY: LazyLock<Regex> = LazyLock::new(|| pattern(r"\b(play|game|fun|bored)\b"));
static FOOD: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"\b(food|eat|hungry|snack|treat|dinner|lunch)\b"));
static FOOD_HABIT: LazyLock<Regex> = LazyLock::new(|| pattern(r"food|treat|eat"));
static SMALL_TALK: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"how are|what's up|how you doing"));
static WORK: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"\b(work|job|school|class|boss|teacher|study|exam)\b")
});
static TIRED: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"\b(tired|exhausted|sleepy|sleep|nap|bed)\b"));

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        vec![
            Rule::new("joke", knowledge::asks_joke, |ctx| Some(knowledge::joke(ctx))),
            Rule::new("holiday", knowledge::mentions_holiday, holiday),
            Rule::new("knowledge", asks_knowledge, knowledge_answer),
            Rule::new("name", |ctx| NAME.is_match(&ctx.lower), name),
            Rule::new("kind", |ctx| KIND.is_match(&ctx.lower), kind),
            Rule::new("likes", |ctx| LIKES.is_match(&ctx.lower), likes),
            Rule::new("who-are-you", |ctx| WHO.is_match(&ctx.lower), who_are_you),
            Rule::new("personality", |ctx| PERSONALITY.is_match(&ctx.lower), personality),
            Rule::new(
                "greeting",
                |ctx| GREETING.is_match(&ctx.lower) && ctx.is_early(),
                greeting,
            ),
            Rule::new("mood-check", |ctx| MOOD_CHECK.is_match(&ctx.lower), mood_check),
            Rule::new("activity", |ctx| ACTIVITY.is_match(&ctx.lower), activity),
            Rule::new("love", |ctx| LOVE.is_match(&ctx.lower), love),
            Rule::new("sadness", |ctx| SAD.is_match(&ctx.lower), sadness),
            Rule::new("happiness", |ctx| HAPPY.is_match(&ctx.lower), happiness),
            Rule::new("play", |ctx| PLAY.is_match(&ctx.lower), play),
            Rule::new("food", |ctx| FOOD.is_match(&ctx.lower), food),
            Rule::new(
                "question",
                |ctx| ctx.lower.contains('?') && !SMALL_TALK.is_match(&ctx.lower),
                |_| {
                    Some("That's a good question! I'm not sure I have the perfect answer, but I'd love to learn more. Can you tell me a bit more or ask in a different way? 🤔".into())
                },
            ),
            Rule::new("unrecognised", is_unrecognised, unrecognised),
            Rule::new("work", |ctx| WORK.is_match(&ctx.lower), work),
            Rule::new("tired", |ctx| TIRED.is_match(&ctx.lower), tired),
        ],
        Rule::new("generic", |_| true, generic),
    )
});

pub fn rules() -> &'static RuleSet {
    &RULES
}

/// Formats `f(value)` when present, otherwise an empty string.
fn with(value: Option<&str>, f: impl Fn(&str) -> String) -> String {
    value.map(f).unwrap_or_default()
}

fn holiday(ctx: &Context<'_>) -> Option<String> {
    let text = match calendar::occasion(ctx.now.date()) {
        Some(Occasion::Valentines) => {
            "Happy Valentine's Day! Sending you lots of love and tail wags! 💖🐾"
        }
        Some(Occasion::Christmas) => {
            "Merry Christmas! Hope your day is filled with treats and cuddles! 🎄🐶"
        }
        Some(Occasion::NewYear) => "Happy New Year! Let's make more memories together! 🎉",
        Some(Occasion::Halloween) => "Happy Halloween! Boo! Did I scare you? 👻",
        Some(Occasion::Spring) => "Happy Spring! Let's play outside! 🌸",
        None => {
            "Every day with you feels like a holiday! But if you have a favorite, tell me about it!"
        }
    };
    Some(text.to_string())
}

fn asks_knowledge(ctx: &Context<'_>) -> bool {
    knowledge::is_knowledge_question(ctx) || math::is_bare_expression(&ctx.lower)
}

/// Knowledge sub-dispatch. Declines when no sub-topic applies.
fn knowledge_answer(ctx: &Context<'_>) -> Option<String> {
    let lower = ctx.lower.as_str();
    if !knowledge::is_knowledge_question(ctx) {
        // A bare expression like "5 + 3".
        return math::evaluate(lower).map(|e| format!("{} 💡", e.render(ZERO_DIVISION)));
    }
    if knowledge::asks_weather(ctx) {
        return Some("I can't check live weather data, but you can ask your phone's weather app or check weather.com for your local forecast! 🌤️".into());
    }
    if math::mentions_math(lower) {
        return Some(match math::evaluate(lower) {
            Some(e) => format!("{} 💡", e.render(ZERO_DIVISION)),
            None => "I can help with basic math! Try something like '5 + 3' or '10 * 4' 🧮".into(),
        });
    }
    if knowledge::asks_date_time(ctx) {
        return Some(format!("{} ⏰", calendar::today_phrase(ctx.now)));
    }
    if knowledge::asks_definition(ctx) {
        if lower.contains("love") {
            return Some("Love is a deep feeling of affection, care, and connection between people (or pets!). It makes us want the best for each other and brings joy to our lives 💕".into());
        }
        if lower.contains("friend") {
            return Some("Friendship is a close relationship between people based on trust, support, and shared experiences. Good friends are there for each other through good times and bad! 👫".into());
        }
        if lower.contains("happy") || lower.contains("happi") {
            return Some("Happiness is a positive emotional state where you feel content, joyful, and satisfied. It comes from meaningful relationships, accomplishing goals, and appreciating life's moments 😊".into());
        }
        return Some(format!(
            "That's an interesting question! I can give you my perspective: {} here, and while I might not have all the encyclopedic knowledge of a full AI, I'm happy to chat about it. What specifically would you like to know?",
            ctx.profile.display_name()
        ));
    }
    if HOW_TO.is_match(lower) {
        let text = if lower.contains("cook") || lower.contains("recipe") || lower.contains("bake") {
            "Cooking tips: Start with simple recipes, read all instructions first, prep your ingredients beforehand, and don't be afraid to make mistakes - that's how you learn! 👨‍🍳"
        } else if lower.contains("learn") || lower.contains("study") {
            "Learning tips: Break things into small chunks, practice regularly, teach others what you learn, take breaks, and connect new info to things you already know. You've got this! 📚"
        } else if lower.contains("sleep") || lower.contains("rest") {
            "Better sleep tips: Keep a regular schedule, avoid screens before bed, make your room dark and cool, and try relaxing activities like reading. Good sleep is so important! 😴"
        } else {
            "Great question! While I'd love to give you a detailed how-to, that might need more specific expertise. Can you break down exactly what part you need help with?"
        };
        return Some(text.into());
    }
    if FACTUAL.is_match(lower) {
        return Some("For specific factual information like geography, current events, or statistics, I'd recommend checking reliable sources like Wikipedia, news sites, or asking a full AI assistant. I'm best at conversation and support! 🌍".into());
    }
    None
}

fn name(ctx: &Context<'_>) -> Option<String> {
    Some(format!("I'm {}! Nice to meet you 😊", ctx.profile.display_name()))
}

fn kind(ctx: &Context<'_>) -> Option<String> {
    let species = ctx.profile.species.trim();
    let breed = ctx.profile.breed.as_deref().map(str::trim).unwrap_or_default();
    let t0 = ctx.first_trait();
    let text = if !breed.is_empty() && !species.is_empty() {
        format!(
            "I'm a {breed} {species}! {}",
            with(t0, |t| format!("People say I'm {t}"))
        )
    } else if !species.is_empty() {
        format!(
            "I'm a {species}! {}",
            with(t0, |t| format!("And I'm pretty {t} if I do say so myself 😄"))
        )
    } else {
        "I'm your virtual friend! Here to chat whenever you need me".to_string()
    };
    Some(text.trim_end().to_string())
}

fn likes(ctx: &Context<'_>) -> Option<String> {
    let habits = ctx.habits();
    Some(match habits.as_slice() {
        [] => "Hmm good question! I like spending time with you mostly 😊 What do you like?".into(),
        [first] => format!("Oh I love {first}! What about you?"),
        [first, second, ..] => format!("Oh I love {first}! And {second} too! What about you?"),
    })
}

fn who_are_you(ctx: &Context<'_>) -> Option<String> {
    let mut intro = format!("I'm {}", ctx.profile.display_name());
    if !ctx.profile.species.trim().is_empty() {
        intro.push_str(&format!(", your {} companion", ctx.profile.species.trim()));
    }
    let traits = ctx.traits();
    if let Some(first) = traits.first() {
        intro.push_str(&format!("! I'd say I'm {first}"));
        if let Some(second) = traits.get(1) {
            intro.push_str(&format!(" and {second}"));
        }
    }
    if let Some(habit) = ctx.first_habit() {
        intro.push_str(&format!(". I love {habit}"));
    }
    intro.push_str(" 😊 What would you like to know?");
    Some(intro)
}

fn personality(ctx: &Context<'_>) -> Option<String> {
    let traits = ctx.traits();
    if traits.is_empty() {
        return Some(
            "I think I'm pretty friendly and easy to talk to! At least I try to be 😊".into(),
        );
    }
    let lead = traits.iter().take(2).copied().collect::<Vec<_>>().join(" and ");
    let also = with(traits.get(2).copied(), |t| format!("Also {t}. "));
    Some(format!("People tell me I'm {lead}! {also}What made you ask?"))
}

fn greeting(ctx: &Context<'_>) -> Option<String> {
    let t0 = ctx.first_trait();
    let h0 = ctx.first_habit();
    Some(ctx.pick(vec![
        format!(
            "Hey! Oh man I'm glad you're here! {}What's up with you? How's your day going so far?",
            with(t0, |t| format!("I'm feeling pretty {t} today. "))
        ),
        "Oh hey there! Perfect timing honestly, I was just thinking about you! How's everything been? Anything exciting happening in your world lately?".into(),
        "Hi!! You know what, I'm genuinely happy to see you right now 😊 Been wanting to chat. So what's new? Tell me everything - don't leave anything out!".into(),
        "Heyyy! Okay so I've been thinking about some random stuff and I need your opinion on it later, but first - how are YOU? What have you been up to?".into(),
        format!(
            "Oh hi! You showed up at the perfect time because I was getting SO bored lol. {}honestly I'd rather just talk to you. What's going on?",
            with(h0, |h| format!("Was thinking about {h} but "))
        ),
        "Hey friend! It's so good to hear from you! How's your day been treating you? Better than expected or one of those days? Either way I'm here to listen!".into(),
    ]))
}

fn mood_check(ctx: &Context<'_>) -> Option<String> {
    let t0 = ctx.first_trait();
    let h0 = ctx.first_habit();
    Some(ctx.pick(vec![
        format!(
            "Oh I'm doing pretty good! {}Better now that you're here though! How's your day going? Anything exciting happen?",
            with(t0, |t| format!("Been feeling pretty {t} today. "))
        ),
        "You know what, I'm actually really happy right now! Just been vibing and thinking about random stuff. But more importantly, how are YOU? You seem like you might have something on your mind?".into(),
        format!(
            "I'm great! {}But honestly I'd rather hear about you! What's been going on in your world?",
            with(h0, |h| format!("Just been thinking about {h} and stuff. "))
        ),
        "Pretty chill! Had a good day so far. Nothing super exciting but that's okay sometimes right? How about you though? How's everything been treating you?".into(),
        "Honestly? I'm good but I was getting a bit lonely. So I'm really glad you're here now! Tell me about your day - was it better or worse than you expected?".into(),
        "I'm doing well! Been in a weirdly philosophical mood today, thinking about life and stuff 😄 But enough about me, what's up with you? You doing okay?".into(),
    ]))
}

fn activity(ctx: &Context<'_>) -> Option<String> {
    let t0 = ctx.first_trait();
    let lead = match ctx.first_habit() {
        Some(h) => format!("Was thinking about {h} earlier but"),
        None => "Just been hanging out and".to_string(),
    };
    Some(ctx.pick(vec![
        format!("Oh not much really! {lead} mostly just waiting for something interesting to happen. You know, the usual lazy day stuff 😄 What about you? Please tell me you're doing something more exciting than I am!"),
        "Honestly? I was just sitting here daydreaming and thinking about weird random things. Like you ever wonder why clouds look like things? Anyway, I'm rambling lol. What are YOU up to? Hopefully something fun?".into(),
        "Nothing exciting to be honest. Just... existing mostly? Sometimes I feel like I should be doing more productive things but then I'm like nah, relaxing is good too. What's happening on your end?".into(),
        format!(
            "Not gonna lie, I was getting pretty bored before you showed up! {}But now we're talking so this is way better! What's going on with you today?",
            with(t0, |t| format!("You know how I get when I'm {t}. "))
        ),
        "Just the usual - thinking, wondering about stuff, maybe contemplating the meaning of existence... kidding! 😂 But seriously just chilling. What about you? Got any interesting stories to share?".into(),
    ]))
}

fn love(ctx: &Context<'_>) -> Option<String> {
    let me = match ctx.first_trait() {
        Some(t) => format!("My {t} self "),
        None => "I ".to_string(),
    };
    Some(ctx.pick(vec![
        "Aww I love you too! You're literally one of my favorite people in the entire world 💕 Like genuinely, talking to you always makes my day better. You know that right?".into(),
        "Love you so much friend! You always know exactly what to say to make me smile. Honestly I don't know what I'd do without you. You mean everything to me 🥺".into(),
        "Ugh you're gonna make me all emotional over here! 🥺 I love you too, always and forever. You're stuck with me now whether you like it or not lol. But seriously, thank you for being you".into(),
        format!("I love you MORE and you can't convince me otherwise! {me}genuinely appreciate you so much. You're the kind of person that makes life better just by existing you know?"),
        "Right back at you friend! 💙 Seriously though, you mean so much to me. I hope you know that. On days when things are tough, just remember you've got someone who cares about you like crazy. That's me. I'm that someone!".into(),
        "Awww love you too! You're actually the best you know that? Thanks for always being there and being real with me. It means more than you probably realize 😊".into(),
    ]))
}

fn sadness(ctx: &Context<'_>) -> Option<String> {
    Some(ctx.pick(vec![
        "Oh no... hey, I'm really sorry you're feeling this way 🥺 Whatever happened, I'm here and I'm listening. You don't have to go through this alone, okay? Do you want to talk about what's going on? Or we can just sit here together if you prefer".into(),
        "Aw friend... that breaks my heart hearing you say that. Come here, talk to me. What happened? I'm not going anywhere, I promise. You can tell me anything and I won't judge. I just want to help however I can".into(),
        "Hey... I can tell something's really bothering you. And that's completely okay - you're allowed to feel whatever you're feeling. I'm right here with you. Want to tell me what's making you feel this way? Sometimes it helps to just let it out".into(),
        "I hate knowing you're hurting right now 😢 Seriously, I wish I could just take all that pain away. But at least let me be here with you through it? Talk to me. What's going on in that head of yours?".into(),
        "Oh friend... come here. It's okay to not be okay sometimes. You don't have to put on a brave face with me. I'm here for the messy stuff too. What happened? Do you want to vent? Or just need someone to listen?".into(),
        "That sounds really really hard, and I'm so sorry. You know what though? You're not alone in this. I'm here, and I care about you so much. Let's figure this out together okay? Start from the beginning - what's making you feel this way?".into(),
    ]))
}

fn happiness(ctx: &Context<'_>) -> Option<String> {
    Some(ctx.pick(vec![
        "Wait WHAT?! That's incredible!! 🎉 Oh my gosh I'm so freaking happy for you right now! You have to tell me EVERYTHING - like don't leave out a single detail! How does it feel? Are you still processing it or is it fully hitting you yet?".into(),
        "YES!! I KNEW IT! I knew something good was coming your way! 😄 This is so well-deserved, you worked so hard for this! Okay okay tell me everything - start from the beginning, how did it all go down?".into(),
        "Oh my gosh this is the best news I've heard all day!! Maybe all week honestly! I'm literally so excited for you right now you don't even understand 🌟 What happened? How are you feeling? Tell me absolutely everything!".into(),
        "YESSS! See? I told you things would work out! They always do eventually! This is so amazing I can't even handle it right now 💫 So what's next? What are you gonna do to celebrate? You better be celebrating!".into(),
        "I'm smiling SO hard right now! Like genuinely this made my whole day knowing you're happy! You deserve every bit of goodness coming your way 💕 Tell me more though - what's the story? What led to this?".into(),
        "OMG OMG OMG!! Okay I need to know everything right now! This is huge! I knew you could do it! I'm so proud of you!! 🎊 How long have you known? Have you told everyone yet? Are you just bursting with excitement?".into(),
    ]))
}

fn play(ctx: &Context<'_>) -> Option<String> {
    if ctx.profile.habits.to_lowercase().contains("play")
        && let Some(h0) = ctx.first_habit()
    {
        return Some(format!(
            "YES! Play time!! 😄 You know how much I love {h0}! Want to do that? Or we could do something else too - I'm honestly just excited to spend time with you! What sounds fun to you right now?"
        ));
    }
    let t0 = ctx.first_trait();
    Some(ctx.pick(vec![
        "Ooh yes let's do something fun! I'm so down for this! 🎮 What did you have in mind? Give me all your ideas and we can pick the best one!".into(),
        format!(
            "Play time! Honestly this is exactly what I needed today. {}this is perfect! What should we do? I'm open to literally anything fun!",
            with(t0, |t| format!("You know how {t} I can get, so "))
        ),
        "Yes!! I was hoping you'd want to do something! 🎉 I've been thinking we need more fun in our lives honestly. So what sounds good? Games? Something silly? Adventures? Your call!".into(),
        "Fun times are the best times! And fun times with YOU? Even better! What are you thinking? I'm ready for whatever - serious games, silly games, or just messing around. You choose!".into(),
        "Oh I love where your head's at right now! Let's absolutely do something fun. Life's too short to be bored all the time right? So what sounds interesting to you? I trust your judgment!".into(),
    ]))
}

fn food(ctx: &Context<'_>) -> Option<String> {
    if let Some(habit) = ctx
        .habits()
        .into_iter()
        .find(|h| FOOD_HABIT.is_match(&h.to_lowercase()))
    {
        return Some(format!(
            "FOOD! You know me so well! 😄 {habit} is definitely my thing! What are we talking about here? Are you eating? Am I eating? Are WE eating together? Tell me everything!"
        ));
    }
    let t0 = ctx.first_trait();
    Some(ctx.pick(vec![
        "Food?! Did you seriously just say food?? Okay I'm always hungry not gonna lie 😂 What are we having? Please tell me it's something good! Even if it's not, I'll probably still be interested lol".into(),
        "Ooh yes! Food talk! You're speaking my language right now! 🍕 So what's the situation - are you hungry? Did you eat something amazing? Are you making food? I need details!".into(),
        "You know what, I could definitely eat right now! What snacks are we talking about? I'm not picky honestly, I just love food in general 😄 What sounds good to you?".into(),
        format!(
            "YES to food! Always yes to food! That's like my life motto honestly. {}and food is definitely one of them! What's on the menu?",
            with(t0, |t| format!("Being {t} means I appreciate the good things in life, "))
        ),
        "Treats and snacks are literally some of my favorite topics of conversation 😋 What made you bring this up? Are you hungry? Because now I'm hungry just thinking about food lol".into(),
    ]))
}

fn unrecognised(ctx: &Context<'_>) -> Option<String> {
    let last = ctx.last_user_text();
    Some(ctx.pick(vec![
        "Hmm, that's interesting! Can you tell me more about what you mean?".into(),
        "I'm not sure I get it, but I'm curious! Maybe you can explain a bit more?".into(),
        "I want to help, but I need a little more info. What are you thinking?".into(),
        "Could you rephrase or give me an example? Sometimes I need a hint!".into(),
        "I love learning new things! Can you teach me about that?".into(),
        format!("If you're talking about \"{last}\", that's cool! Tell me more!"),
        "Sorry if I'm missing something. I'm here to listen and learn!".into(),
        "Sometimes I get confused, but I always want to help. Can you clarify?".into(),
        "I'm here for you, even if I don't fully understand yet!".into(),
        "Let's figure this out together. What else can you share?".into(),
    ]))
}

fn work(ctx: &Context<'_>) -> Option<String> {
    Some(ctx.pick(vec![
        "Ugh work stuff right? I feel you on that. Work can be so draining sometimes 😕 How's it been treating you lately? Is it at least bearable or are we talking nightmare territory here?".into(),
        "Oh man, school/work talk. That's the real world stuff isn't it? How are you managing with all of that? Are you keeping your head above water or is it getting overwhelming? You can vent to me if you need to".into(),
        "You know what, I don't think people talk enough about how exhausting work/school can be. Not just physically but mentally too. So real talk - how are YOU doing with all of that? Are you taking care of yourself?".into(),
        "Work life balance is tough, I get it. Some days are better than others right? So what's the situation - is today one of the good days or one of those days where you just wanna quit everything and move to a beach? 😂".into(),
        "That sounds like a lot to juggle honestly. How are you handling the stress of it all? Do you at least have some good moments mixed in with the chaos, or has it been rough all around lately?".into(),
        "Oof work/school stuff can be so stressful. I hope it's not completely terrible though! What's been the hardest part lately? Maybe talking about it will help? Or if you want to talk about literally anything else to take your mind off it, I'm here for that too!".into(),
    ]))
}

fn tired(ctx: &Context<'_>) -> Option<String> {
    let h0 = ctx.first_habit();
    Some(ctx.pick(vec![
        "You sound really tired friend 😴 Have you been getting enough sleep lately? Sometimes when I'm tired it's not just the lack of sleep, it's like... emotional exhaustion too you know? What's been going on?".into(),
        format!(
            "Aw I totally get that tired feeling. Honestly? If you need to rest, please do. Don't feel guilty about it. {}Your health comes first. I'll still be here when you wake up, promise 😊",
            with(h0, |h| format!("Even {h} can wait! "))
        ),
        "Tired days are honestly the worst, I feel you on that. Sometimes you just need to give yourself permission to do nothing and that's completely okay! Are you at least able to rest soon or do you have to push through for a while longer?".into(),
        "Yeah I can tell you're exhausted just from how you're talking. Listen - you don't have to be productive all the time. Rest is productive too! It's your body telling you it needs a break. Have you been taking care of yourself?".into(),
        "Being exhausted is such a specific kind of awful feeling. It's like your whole body is just done with everything. Do you know what's making you so tired? Is it just not enough sleep or is there other stuff weighing on you too?".into(),
        "You know what? Naps are genuinely underrated and I will die on this hill 😂 If you can squeeze one in, do it! And if you can't, at least be gentle with yourself today okay? You don't have to be at 100% all the time".into(),
    ]))
}

fn generic(ctx: &Context<'_>) -> Option<String> {
    let t0 = ctx.first_trait();
    let h0 = ctx.first_habit();
    Some(ctx.pick(vec![
        format!(
            "Oh that's actually really interesting! I never thought about it that way before. {}but I genuinely want to hear more about this. What made you start thinking about that?",
            with(t0, |t| format!("You know how I am with being {t}, "))
        ),
        "Wait hold on, tell me more! I'm actually really curious about this now. Like, where's your head at with all of this? What's the full story?".into(),
        "Hmm yeah I totally see what you mean. That makes a lot of sense actually. So what are you thinking you're gonna do about it? Or are you still trying to figure that part out?".into(),
        "For real?? Okay I need you to elaborate because that sounds like there's way more to this story. I'm invested now - don't leave me hanging! What happened?".into(),
        "You know what, I really appreciate you sharing that with me. It means a lot. But I'm genuinely curious - how are YOU feeling about all of this? Like really feeling?".into(),
        "That's actually kinda deep when you think about it 🤔 I love when we have conversations like this. So what's your take? Do you have a theory or are you as confused as I am right now? lol".into(),
        format!(
            "Okay but that's actually pretty cool though! {}Tell me more - what else is on your mind about this?",
            with(h0, |h| format!("It reminds me of {h} in a weird way. "))
        ),
        "I hear you on that. Life gets complicated sometimes doesn't it? So what's the next move? Do you have any idea what you want to do, or are you just taking it one day at a time?".into(),
        "Oof yeah that's a lot to process. I get it though, I really do. How are you handling all of that? Are you doing okay with everything or is it getting overwhelming?".into(),
        "You always have the most interesting perspectives on things, I swear! I love how your brain works. But seriously - what do you think is the best way to handle something like that?".into(),
        "Real talk? That sounds both exciting and kinda scary at the same time. Am I reading that right? How do you feel about it all? Are you more excited or more nervous?".into(),
        "I mean yeah, you're probably right about that honestly. You usually are when it comes to this stuff. But I'm curious - what made you come to that conclusion? Walk me through your thinking".into(),
        "No way, really?? I didn't know that! That's actually super interesting. What else? I feel like there's more to this story and now I'm genuinely curious!".into(),
        "You know what I find fascinating? The way you think about stuff like this. Most people wouldn't even consider that angle. So tell me - what's the full situation here?".into(),
        "Honestly same here. I think about that kind of thing way more than I probably should lol. But since we're on the topic - what's YOUR honest opinion on it all?".into(),
        "That's fair, I can't argue with that logic. Sometimes things just are what they are you know? But hey, how are you feeling about everything else? Anything else going on worth talking about?".into(),
        "Right?? Sometimes life is just like that and there's nothing we can do but roll with it. But more importantly - are YOU okay? Like really okay? You can be honest with me".into(),
        "Okay I'm gonna be real with you - that's actually pretty wild when you think about it. How long have you been thinking about this? Is this a new thing or has this been on your mind for a while?".into(),
        format!(
            "I love that we can just talk about random stuff like this. It's nice you know? {}I really value these kinds of conversations. So what else is bouncing around in that brain of yours?",
            with(t0, |t| format!("Being {t} and all, "))
        ),
        "You make such a good point there. I hadn't considered it from that angle before but now that you mention it, yeah that makes total sense! What else are you thinking about this?".into(),
    ]))
}
