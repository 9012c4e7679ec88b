use chat_init_service::chat_init::{ ChatInitError, ChatInitService };
use chat_init_service::config::prompt::load_prompts_from_str;
use chat_init_service::models::simulation::{
    GenerateChatMessagesRequest,
    SimulationInfo,
    UserInfo,
};
use chat_init_service::utils::id::is_message_id;
use serde_json::json;
use std::collections::HashSet;

fn negotiation_request(variables: &[&str]) -> GenerateChatMessagesRequest {
    GenerateChatMessagesRequest {
        simulation: SimulationInfo {
            name: "Negotiation 101".into(),
            description: "Practice closing a deal.".into(),
            variables: variables.iter().map(|v| v.to_string()).collect(),
        },
        user: UserInfo { name: "Alex".into() },
    }
}

#[tokio::test]
async fn builds_three_ordered_messages() {
    let service = ChatInitService::new(None);
    let request = negotiation_request(&["active listening", "framing", "anchoring"]);
    let response = service.generate_initial_chat(&request).await.unwrap();
    let messages = &response.chat.messages;

    assert_eq!(messages.len(), 3);
    assert!(response.chat.success);

    assert!(messages[0].content.contains("Welcome Alex!"));
    assert!(messages[0].content.contains("'Negotiation 101'"));
    assert!(messages[0].content.contains("active listening, framing"));
    assert!(!messages[0].content.contains("anchoring"));
    assert_eq!(
        messages[1].content,
        "Here's your scenario: Practice closing a deal. Take your time to read through the situation and think about how you'd like to approach it."
    );
    assert_eq!(
        messages[2].content,
        "Are you ready to begin? Please let me know how you'd like to start approaching this situation."
    );
}

#[tokio::test]
async fn metadata_describes_the_request() {
    let service = ChatInitService::new(None);
    let request = negotiation_request(&["active listening"]);
    let response = service.generate_initial_chat(&request).await.unwrap();

    assert_eq!(
        serde_json::Value::Object(response.metadata.clone()),
        json!({ "simulation": "Negotiation 101", "user": "Alex", "messages_count": 3 })
    );
    assert_eq!(response.metadata["messages_count"], json!(response.chat.messages.len()));
}

#[tokio::test]
async fn message_ids_are_well_formed_and_unique_across_calls() {
    let service = ChatInitService::new(None);
    let request = negotiation_request(&[]);
    let mut seen = HashSet::new();

    for _ in 0..5 {
        let response = service.generate_initial_chat(&request).await.unwrap();
        for message in response.chat.messages {
            assert!(is_message_id(&message.id), "bad id: {}", message.id);
            assert!(seen.insert(message.id));
        }
    }
    assert_eq!(seen.len(), 15);
}

#[tokio::test]
async fn welcome_handles_any_number_of_variables() {
    let service = ChatInitService::new(None);
    let cases: [(&[&str], &str); 4] = [
        (&[], "practice  in a realistic"),
        (&["empathy"], "practice empathy in a realistic"),
        (&["empathy", "clarity"], "practice empathy, clarity in a realistic"),
        (&["empathy", "clarity", "timing", "tone"], "practice empathy, clarity in a realistic"),
    ];

    for (variables, expected) in cases {
        let response = service.generate_initial_chat(&negotiation_request(variables)).await.unwrap();
        assert!(
            response.chat.messages[0].content.contains(expected),
            "{:?} produced {}",
            variables,
            response.chat.messages[0].content
        );
    }
}

#[tokio::test]
async fn serializes_in_backend_format() {
    let service = ChatInitService::new(None);
    let response = service.generate_initial_chat(&negotiation_request(&["a"])).await.unwrap();
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["chat"]["chat_id"], json!(null));
    assert_eq!(value["chat"]["skill_id"], json!(1));
    assert_eq!(value["chat"]["simulation_id"], json!(1));
    assert_eq!(value["chat"]["success"], json!(true));

    let first = &value["chat"]["messages"][0];
    assert_eq!(first["message_type"], json!("Text"));
    assert_eq!(first["author"], json!({ "id": 1, "name": "AI Coordinator", "avatar": null }));
    assert_eq!(first["has_hint"], json!(false));
    assert_eq!(first["response_time_limit"], json!(null));
}

#[tokio::test]
async fn template_fault_is_returned_to_caller() {
    let prompts = load_prompts_from_str(r#"{"intro_templates": {}}"#).unwrap();
    let service = ChatInitService::with_prompts(None, prompts);

    let result = service.generate_initial_chat(&negotiation_request(&["a", "b"])).await;
    match result {
        Err(ChatInitError::Template(e)) => {
            assert_eq!(e.to_string(), "Prompt template 'intro_templates:welcome' not found");
        }
        Ok(_) => panic!("expected a template fault"),
    }
}
