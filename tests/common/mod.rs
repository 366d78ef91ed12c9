use opine::intent;
use opine::models::{self, AnswerDoc, SurveyDoc};
use opine::state::{AppState, Store};

pub fn survey_docs() -> Vec<SurveyDoc> {
    models::surveys_from_json(
        r#"[
            {"id": "58ee63c65a2d576d5125b4bc", "title": "Morning Routines"},
            {"id": "58ee63c65a2d576d5125b4bd", "title": "Office Snacks", "description": "What should we stock?"},
            {"id": "58ee63c65a2d576d5125b4bf", "title": "Remote Work"}
        ]"#,
    )
    .expect("failed to parse survey fixtures")
}

pub fn nested_survey() -> SurveyDoc {
    models::survey_from_json(
        r#"{
            "id": "58ee63c65a2d576d5125b4bc",
            "title": "Morning Routines",
            "questions": [
                {"id": "q-scale", "kind": "Scale", "title": "How rested do you feel?", "required": true, "min": 1, "max": 5},
                {"id": "q-text", "kind": "Text", "title": "Anything else?", "max": 280},
                {"id": "q-select", "kind": "Select", "title": "Pick your breakfast", "maxSelection": 2, "options": [
                    {"id": "o-eggs", "label": "Eggs"},
                    {"id": "o-toast", "label": "Toast"}
                ]}
            ]
        }"#,
    )
    .expect("failed to parse nested survey fixture")
}

pub fn response_docs() -> Vec<AnswerDoc> {
    models::answers_from_json(
        r#"[
            {"questionId": "q-scale", "kind": "Scale", "value": 4},
            {"questionId": "q-select", "kind": "Select", "value": "o-eggs"},
            {"questionId": "q-select", "kind": "Select", "value": "o-toast"}
        ]"#,
    )
    .expect("failed to parse response fixtures")
}

pub fn seeded_store() -> Store {
    let mut store = Store::default();
    store.dispatch(&intent::load_surveys(&survey_docs()));
    store.dispatch(&intent::open_survey(&nested_survey()));
    store
}

pub fn seeded_state() -> AppState {
    seeded_store().state()
}
