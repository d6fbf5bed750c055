//! Static question banks: five topics, two pages each.
//!
//! Page content is data, not logic; the controller in [`super::controller`]
//! treats every page identically.

use crate::domain::{Mode, Topic};
use crate::quiz::{ChoiceOption, Question, QuestionKind, QuizPage};
use crate::validation::Matcher;

const FEEDBACK_CORRECT: &str = "Correct! Nice work!";
const FEEDBACK_RETRY: &str = "Not quite. Give it another try.";

/// Look up the static definition of one quiz page.
pub fn page(mode: Mode, topic: Topic) -> &'static QuizPage {
    match (mode, topic) {
        (Mode::Learn, Topic::Basic) => &LEARN_BASIC,
        (Mode::Learn, Topic::IpAddress) => &LEARN_IP_ADDRESS,
        (Mode::Learn, Topic::Routing) => &LEARN_ROUTING,
        (Mode::Learn, Topic::Vlan) => &LEARN_VLAN,
        (Mode::Learn, Topic::Wireless) => &LEARN_WIRELESS,
        (Mode::Challenge, Topic::Basic) => &CHALLENGE_BASIC,
        (Mode::Challenge, Topic::IpAddress) => &CHALLENGE_IP_ADDRESS,
        (Mode::Challenge, Topic::Routing) => &CHALLENGE_ROUTING,
        (Mode::Challenge, Topic::Vlan) => &CHALLENGE_VLAN,
        (Mode::Challenge, Topic::Wireless) => &CHALLENGE_WIRELESS,
    }
}

/// Every page, for menus and content sanity checks.
pub fn all_pages() -> impl Iterator<Item = &'static QuizPage> {
    Mode::ALL
        .into_iter()
        .flat_map(|mode| Topic::ALL.into_iter().map(move |topic| page(mode, topic)))
}

// ============================================================================
// Learn pages
// ============================================================================

static LEARN_BASIC: QuizPage = QuizPage {
    topic: Topic::Basic,
    mode: Mode::Learn,
    title: "Network Basics",
    intro: "Devices on the same network share an address range and reach \
            other networks through a router. Let's check the fundamentals.",
    hint: "A router's address usually ends in .1, and the other hosts on a \
           /24 network use the last octet from 2 to 254. The network class \
           is decided by the first octet. The name a wireless network \
           broadcasts is its SSID.",
    questions: [
        Question {
            prompt: "The router's IP address is 192.168.1.1. Give one address \
                     that could be assigned to a PC on the same network.",
            kind: QuestionKind::Text { placeholder: "Enter an IP address" },
            matcher: Matcher::HostInNet { prefix: "192.168.1.", min: 2, max: 254 },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: Some(
                "Right network, but that host number is reserved. Pick one \
                 between 2 and 254.",
            ),
            incorrect_feedback: "Think of an address between 192.168.1.2 and 192.168.1.254.",
        },
        Question {
            prompt: "Which network class does the address 192.168.1.1 belong to?",
            kind: QuestionKind::Choice { options: &CLASS_OPTIONS },
            matcher: Matcher::Choice { token: "c" },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: "Look at the first octet: 192 falls in the class C range.",
        },
        Question {
            prompt: "What is the broadcast name that identifies a wireless \
                     network called?",
            kind: QuestionKind::Text { placeholder: "Enter the term" },
            matcher: Matcher::Exact { answer: "ssid", ignore_case: true },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: "It is a four-letter abbreviation starting with S.",
        },
    ],
};

static LEARN_IP_ADDRESS: QuizPage = QuizPage {
    topic: Topic::IpAddress,
    mode: Mode::Learn,
    title: "IP Addressing",
    intro: "A small home network: a router at 192.168.1.1, PC1 at \
            192.168.1.10, and PC2 whose address is still missing. An IP \
            address is a device's street address on the network.",
    hint: "PC2 sits on the same network, so the first three octets stay \
           192.168.1 and the last octet must not collide with another \
           device. Home networks usually use a 24-bit mask, and the class \
           is determined by the first octet.",
    questions: [
        Question {
            prompt: "What IP address should PC2 get?",
            kind: QuestionKind::Text { placeholder: "Enter PC2's IP address" },
            matcher: Matcher::Prefix { answer: "192.168.1.11", prefix: "192.168.1." },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: Some(
                "Close! That's the right network, but try the next free host \
                 address after PC1.",
            ),
            incorrect_feedback: "Use the router and PC1 addresses as a hint; PC2 lives on the \
                                 same network.",
        },
        Question {
            prompt: "What is the subnet mask of this network?",
            kind: QuestionKind::Choice { options: &MASK_OPTIONS },
            matcher: Matcher::Choice { token: "255.255.255.0" },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: "Think of the usual mask for a home /24 network.",
        },
        Question {
            prompt: "Which network class does 192.168.1.0 belong to?",
            kind: QuestionKind::Choice { options: &CLASS_OPTIONS },
            matcher: Matcher::Choice { token: "c" },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: "Which class covers first octets from 192 to 223?",
        },
    ],
};

static LEARN_ROUTING: QuizPage = QuizPage {
    topic: Topic::Routing,
    mode: Mode::Learn,
    title: "Static Routing",
    intro: "Two networks joined by routers. With static routing the \
            administrator fills the routing table by hand: router A must \
            know where to send packets for the 10.0.0.0/24 network.",
    hint: "A static route names the destination network, its subnet mask \
           and the next hop, which is the directly connected neighbor's \
           address. The default route 0.0.0.0/0 is the route of last \
           resort.",
    questions: [
        Question {
            prompt: "Configuring a static route from router A towards \
                     10.0.0.0/24: what is the next-hop IP address?",
            kind: QuestionKind::Text { placeholder: "Enter the next-hop IP address" },
            matcher: Matcher::Prefix { answer: "10.0.0.1", prefix: "10.0.0." },
            close_feedback: Some(
                "Right network! The next hop is the neighbor router's own \
                 interface address.",
            ),
            correct_feedback: FEEDBACK_CORRECT,
            incorrect_feedback: "The next hop is the directly connected router's address.",
        },
        Question {
            prompt: "What information does a static route need?",
            kind: QuestionKind::Choice { options: &ROUTE_INFO_OPTIONS },
            matcher: Matcher::Choice { token: "b" },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: FEEDBACK_RETRY,
        },
        Question {
            prompt: "What is the role of the default route (0.0.0.0/0)?",
            kind: QuestionKind::Choice { options: &DEFAULT_ROUTE_OPTIONS },
            matcher: Matcher::Choice { token: "c" },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: "Remember what happens when no other route matches.",
        },
    ],
};

static LEARN_VLAN: QuizPage = QuizPage {
    topic: Topic::Vlan,
    mode: Mode::Learn,
    title: "VLANs",
    intro: "One switch, three departments: marketing on VLAN 10, \
            accounting on VLAN 20, development on VLAN 30. VLANs divide a \
            network logically, independent of the cabling.",
    hint: "Check the VLAN id written next to each PC in the diagram. VLANs \
           exist mainly to separate departments from each other, and a \
           trunk port carries the traffic of several VLANs over one link.",
    questions: [
        Question {
            prompt: "Which VLAN id does the accounting department's PC belong to?",
            kind: QuestionKind::Text { placeholder: "Enter the VLAN id" },
            matcher: Matcher::ExactWithNear { answer: "20", near: &["10", "30"] },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: Some("That's another department's VLAN id. Check the diagram again."),
            incorrect_feedback: "Find the VLAN id assigned to the accounting PC.",
        },
        Question {
            prompt: "What is the main purpose of using VLANs?",
            kind: QuestionKind::Choice { options: &VLAN_PURPOSE_OPTIONS },
            matcher: Matcher::Choice { token: "security" },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: "Why would you want departments logically separated?",
        },
        Question {
            prompt: "What is the main role of a trunk port?",
            kind: QuestionKind::Choice { options: &TRUNK_ROLE_OPTIONS },
            matcher: Matcher::Choice { token: "b" },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: "Think about how VLANs travel between two switches.",
        },
    ],
};

static LEARN_WIRELESS: QuizPage = QuizPage {
    topic: Topic::Wireless,
    mode: Mode::Learn,
    title: "Wireless LAN",
    intro: "A home access point is broadcasting the network name \
            \"MyHomeWifi\". Wireless networks are identified by an SSID \
            and protected by a security protocol.",
    hint: "The SSID is the name shown in the diagram. WPA3 is the newest \
           security protocol, and the 2.4 GHz band offers 14 channels \
           (region permitting).",
    questions: [
        Question {
            prompt: "What is the SSID of this home Wi-Fi network?",
            kind: QuestionKind::Text { placeholder: "Enter the SSID" },
            matcher: Matcher::Exact { answer: "MyHomeWifi", ignore_case: true },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: "The SSID is the network name the access point broadcasts.",
        },
        Question {
            prompt: "Which of these is the newest Wi-Fi security protocol?",
            kind: QuestionKind::Choice { options: &SECURITY_OPTIONS },
            matcher: Matcher::Choice { token: "wpa3" },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: "WEP and WPA2 both have newer successors.",
        },
        Question {
            prompt: "How many channels does 2.4 GHz Wi-Fi usually offer?",
            kind: QuestionKind::Choice { options: &CHANNEL_COUNT_OPTIONS },
            matcher: Matcher::Choice { token: "b" },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: FEEDBACK_RETRY,
        },
    ],
};

// ============================================================================
// Challenge pages
// ============================================================================

static CHALLENGE_BASIC: QuizPage = QuizPage {
    topic: Topic::Basic,
    mode: Mode::Challenge,
    title: "Topology Build-out",
    intro: "R1 connects two switches; PC1 and PC2 hang off S1, a server \
            off S2. Write the configuration for each device.",
    hint: "The router interface needs an address, a mask and a \"no \
           shutdown\". The switch port is an access port in VLAN 10. The \
           PC needs an address, a mask and the router as gateway.",
    questions: [
        Question {
            prompt: "Configure R1's GigabitEthernet0/0 with 192.168.1.1/24 \
                     and bring it up.",
            kind: QuestionKind::TextArea { placeholder: "Enter the router configuration" },
            matcher: Matcher::Pattern {
                regex: r"(?is)interface GigabitEthernet0/0.*?ip address 192\.168\.1\.1 255\.255\.255\.0.*?no shutdown",
            },
            correct_feedback: "Correct! A complete interface configuration.",
            close_feedback: None,
            incorrect_feedback: "Check the interface name, the address line and whether the \
                                 interface is enabled.",
        },
        Question {
            prompt: "Configure S1's GigabitEthernet0/1 as an access port in VLAN 10.",
            kind: QuestionKind::TextArea { placeholder: "Enter the switch configuration" },
            matcher: Matcher::Pattern {
                regex: r"(?is)interface GigabitEthernet0/1.*?switchport mode access.*?switchport access vlan 10",
            },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: "An access port needs both a mode and a VLAN assignment.",
        },
        Question {
            prompt: "Give PC1 the address 192.168.1.100/24 with R1 as its gateway.",
            kind: QuestionKind::TextArea { placeholder: "Enter the PC network settings" },
            matcher: Matcher::Pattern {
                regex: r"(?is)ip 192\.168\.1\.100 255\.255\.255\.0.*?gateway 192\.168\.1\.1",
            },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: "The PC needs an ip line and a gateway line.",
        },
    ],
};

static CHALLENGE_IP_ADDRESS: QuizPage = QuizPage {
    topic: Topic::IpAddress,
    mode: Mode::Challenge,
    title: "Addressing Challenge",
    intro: "Same home network, applied: the router is 192.168.1.1, PC1 is \
            192.168.1.10, and you are commissioning PC2.",
    hint: "PC2 needs the next free host address, the common /24 mask, and \
           the router as its way out of the network.",
    questions: [
        Question {
            prompt: "Assign PC2 an IP address.",
            kind: QuestionKind::Text { placeholder: "Enter PC2's IP address" },
            matcher: Matcher::Prefix { answer: "192.168.1.11", prefix: "192.168.1." },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: Some("Right network; take the next free address after PC1."),
            incorrect_feedback: "PC2 must live on the 192.168.1.0 network.",
        },
        Question {
            prompt: "What subnet mask should PC2 use?",
            kind: QuestionKind::Text { placeholder: "Enter the subnet mask" },
            matcher: Matcher::Exact { answer: "255.255.255.0", ignore_case: false },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: "A /24 network written as a dotted quad.",
        },
        Question {
            prompt: "What default gateway should PC2 use?",
            kind: QuestionKind::Text { placeholder: "Enter the default gateway" },
            matcher: Matcher::Exact { answer: "192.168.1.1", ignore_case: false },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: "The gateway is the device that leads out of the local network.",
        },
    ],
};

static CHALLENGE_ROUTING: QuizPage = QuizPage {
    topic: Topic::Routing,
    mode: Mode::Challenge,
    title: "Static Routing Challenge",
    intro: "R1 (10.0.0.1) and R2 (10.0.0.2) connect two networks; PC1 sits \
            behind R1, a server at 192.168.2.2 behind R2. Configure R1 to \
            reach the server.",
    hint: "A static route takes the destination network, its subnet mask \
           and the next hop. The next hop is the directly connected \
           router. The command shape is \"ip route <network> <mask> \
           <next-hop>\"; assume a plain class C mask.",
    questions: [
        Question {
            prompt: "1. For a static route from R1 to the server, what is the \
                     next-hop IP address?",
            kind: QuestionKind::Text { placeholder: "Enter the next-hop IP address" },
            matcher: Matcher::Exact { answer: "10.0.0.2", ignore_case: false },
            correct_feedback: "Correct! A fine piece of routing.",
            close_feedback: None,
            incorrect_feedback: "Check R2's address on the link between the routers.",
        },
        Question {
            prompt: "2. What destination network address does the static route \
                     on R1 name?",
            kind: QuestionKind::Text { placeholder: "Enter the destination network" },
            matcher: Matcher::Exact { answer: "192.168.2.0", ignore_case: false },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: "Which network does the server belong to?",
        },
        Question {
            prompt: "3. Enter the full command that configures this static \
                     route on R1.",
            kind: QuestionKind::TextArea { placeholder: "Enter the routing command" },
            matcher: Matcher::Exact {
                answer: "ip route 192.168.2.0 255.255.255.0 10.0.0.2",
                ignore_case: true,
            },
            correct_feedback: "Correct! A perfect command.",
            close_feedback: None,
            incorrect_feedback: "Re-check the command shape and the three values it needs.",
        },
    ],
};

static CHALLENGE_VLAN: QuizPage = QuizPage {
    topic: Topic::Vlan,
    mode: Mode::Challenge,
    title: "VLAN Challenge",
    intro: "A core switch trunks to two access switches; the server hangs \
            off VLAN 40. Configure the segmentation.",
    hint: "The server's VLAN id is in the diagram. Trunk ports are \
           configured with \"switchport mode trunk\", and an access port \
           belongs to exactly one VLAN.",
    questions: [
        Question {
            prompt: "Which VLAN id does the server belong to?",
            kind: QuestionKind::Text { placeholder: "Enter the VLAN id" },
            matcher: Matcher::Exact { answer: "40", ignore_case: false },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: "Check the VLAN id written next to the server.",
        },
        Question {
            prompt: "Enter the interface command that makes a port a trunk.",
            kind: QuestionKind::Text { placeholder: "Enter the command" },
            matcher: Matcher::Contains { needle: "switchport mode trunk" },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: "Recall the switchport command that sets trunk mode.",
        },
        Question {
            prompt: "What does an access port do?",
            kind: QuestionKind::Choice { options: &ACCESS_PORT_OPTIONS },
            matcher: Matcher::Choice { token: "c" },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: "An access port is the opposite of a trunk.",
        },
    ],
};

static CHALLENGE_WIRELESS: QuizPage = QuizPage {
    topic: Topic::Wireless,
    mode: Mode::Challenge,
    title: "Wireless Challenge",
    intro: "You are commissioning an office access point on the 2.4 GHz \
            band and deciding how to tune it.",
    hint: "2.4 GHz channels run from 1 to 14. The 5 GHz band trades range \
           for speed, and access points typically beacon every 100 \
           milliseconds.",
    questions: [
        Question {
            prompt: "Pick a valid 2.4 GHz channel for the access point.",
            kind: QuestionKind::Text { placeholder: "Enter a channel number" },
            matcher: Matcher::IntRange { min: 1, max: 14 },
            correct_feedback: "Correct! A valid wireless configuration.",
            close_feedback: None,
            incorrect_feedback: "The channel must be within 1 to 14.",
        },
        Question {
            prompt: "Which band generally allows faster transfers?",
            kind: QuestionKind::Choice { options: &BAND_OPTIONS },
            matcher: Matcher::Choice { token: "5" },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: "Which band carries more data at shorter range?",
        },
        Question {
            prompt: "How often does an access point usually send beacon frames?",
            kind: QuestionKind::Choice { options: &BEACON_OPTIONS },
            matcher: Matcher::Choice { token: "b" },
            correct_feedback: FEEDBACK_CORRECT,
            close_feedback: None,
            incorrect_feedback: "The common default is on the order of ten times a second.",
        },
    ],
};

// ============================================================================
// Shared option sets
// ============================================================================

static CLASS_OPTIONS: [ChoiceOption; 3] = [
    ChoiceOption { token: "a", label: "Class A" },
    ChoiceOption { token: "b", label: "Class B" },
    ChoiceOption { token: "c", label: "Class C" },
];

static MASK_OPTIONS: [ChoiceOption; 3] = [
    ChoiceOption { token: "255.255.255.0", label: "255.255.255.0" },
    ChoiceOption { token: "255.255.0.0", label: "255.255.0.0" },
    ChoiceOption { token: "255.0.0.0", label: "255.0.0.0" },
];

static ROUTE_INFO_OPTIONS: [ChoiceOption; 3] = [
    ChoiceOption { token: "a", label: "Source IP address, destination IP address, port number" },
    ChoiceOption { token: "b", label: "Destination network, subnet mask, next hop" },
    ChoiceOption { token: "c", label: "MAC address, IP address, default gateway" },
];

static DEFAULT_ROUTE_OPTIONS: [ChoiceOption; 3] = [
    ChoiceOption { token: "a", label: "Select the fastest route" },
    ChoiceOption { token: "b", label: "Update the routing table automatically" },
    ChoiceOption { token: "c", label: "Used when no other route matches" },
];

static VLAN_PURPOSE_OPTIONS: [ChoiceOption; 3] = [
    ChoiceOption { token: "speed", label: "Improve network speed" },
    ChoiceOption { token: "security", label: "Strengthen security" },
    ChoiceOption { token: "cost", label: "Reduce cost" },
];

static TRUNK_ROLE_OPTIONS: [ChoiceOption; 3] = [
    ChoiceOption { token: "a", label: "Carry traffic for a single VLAN only" },
    ChoiceOption { token: "b", label: "Carry traffic for multiple VLANs" },
    ChoiceOption { token: "c", label: "Disable VLANs" },
];

static ACCESS_PORT_OPTIONS: [ChoiceOption; 3] = [
    ChoiceOption { token: "a", label: "Carry all VLANs between switches" },
    ChoiceOption { token: "b", label: "Block all VLAN traffic" },
    ChoiceOption { token: "c", label: "Connect an end device to exactly one VLAN" },
];

static SECURITY_OPTIONS: [ChoiceOption; 3] = [
    ChoiceOption { token: "wep", label: "WEP" },
    ChoiceOption { token: "wpa2", label: "WPA2" },
    ChoiceOption { token: "wpa3", label: "WPA3" },
];

static CHANNEL_COUNT_OPTIONS: [ChoiceOption; 3] = [
    ChoiceOption { token: "a", label: "5 channels" },
    ChoiceOption { token: "b", label: "14 channels" },
    ChoiceOption { token: "c", label: "20 channels" },
];

static BAND_OPTIONS: [ChoiceOption; 2] = [
    ChoiceOption { token: "2.4", label: "2.4 GHz" },
    ChoiceOption { token: "5", label: "5 GHz" },
];

static BEACON_OPTIONS: [ChoiceOption; 3] = [
    ChoiceOption { token: "a", label: "Every 10 milliseconds" },
    ChoiceOption { token: "b", label: "Every 100 milliseconds" },
    ChoiceOption { token: "c", label: "Every 10 seconds" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::AnswerResult;
    use regex::Regex;

    #[test]
    fn test_every_topic_and_mode_has_a_page() {
        assert_eq!(all_pages().count(), Topic::ALL.len() * Mode::ALL.len());
        for mode in Mode::ALL {
            for topic in Topic::ALL {
                let p = page(mode, topic);
                assert_eq!(p.topic, topic);
                assert_eq!(p.mode, mode);
            }
        }
    }

    #[test]
    fn test_every_answer_pattern_compiles() {
        for p in all_pages() {
            for q in &p.questions {
                if let Matcher::Pattern { regex } = &q.matcher {
                    assert!(Regex::new(regex).is_ok(), "bad pattern on {:?}: {}", p.topic, regex);
                }
            }
        }
    }

    #[test]
    fn test_choice_questions_expect_an_offered_token() {
        for p in all_pages() {
            for q in &p.questions {
                if let (QuestionKind::Choice { options }, Matcher::Choice { token }) =
                    (&q.kind, &q.matcher)
                {
                    assert!(
                        options.iter().any(|o| o.token == *token),
                        "{:?}/{:?}: expected token {:?} not offered",
                        p.mode,
                        p.topic,
                        token
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_question_accepts_its_own_answer() {
        // Representative correct inputs, one per question
        let answers: &[(&Mode, &Topic, [&str; 3])] = &[
            (&Mode::Learn, &Topic::Basic, ["192.168.1.10", "c", "SSID"]),
            (&Mode::Learn, &Topic::IpAddress, ["192.168.1.11", "255.255.255.0", "c"]),
            (&Mode::Learn, &Topic::Routing, ["10.0.0.1", "b", "c"]),
            (&Mode::Learn, &Topic::Vlan, ["20", "security", "b"]),
            (&Mode::Learn, &Topic::Wireless, ["myhomewifi", "wpa3", "b"]),
            (
                &Mode::Challenge,
                &Topic::Basic,
                [
                    "interface GigabitEthernet0/0\nip address 192.168.1.1 255.255.255.0\nno shutdown",
                    "interface GigabitEthernet0/1\nswitchport mode access\nswitchport access vlan 10",
                    "ip 192.168.1.100 255.255.255.0\ngateway 192.168.1.1",
                ],
            ),
            (
                &Mode::Challenge,
                &Topic::IpAddress,
                ["192.168.1.11", "255.255.255.0", "192.168.1.1"],
            ),
            (
                &Mode::Challenge,
                &Topic::Routing,
                ["10.0.0.2", "192.168.2.0", "IP ROUTE 192.168.2.0 255.255.255.0 10.0.0.2"],
            ),
            (
                &Mode::Challenge,
                &Topic::Vlan,
                ["40", "Switch(config-if)# switchport mode trunk", "c"],
            ),
            (&Mode::Challenge, &Topic::Wireless, ["6", "5", "b"]),
        ];

        for (mode, topic, inputs) in answers {
            let p = page(**mode, **topic);
            for (q, input) in p.questions.iter().zip(inputs) {
                let (result, _) = q.grade(input);
                assert_eq!(
                    result,
                    AnswerResult::Correct,
                    "{:?}/{:?}: {:?} should be correct",
                    mode,
                    topic,
                    input
                );
            }
        }
    }
}
