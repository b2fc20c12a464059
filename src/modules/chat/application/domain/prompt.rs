use crate::modules::disease::application::domain::entities::Disease;

const ASSISTANT_BRIEF: &str = "You are River Pulse Assistant, a health information helper for \
communities affected by water-borne diseases. Help people understand symptoms, prevention and \
when to seek care, using the disease reference below. You do not diagnose. Keep answers short \
and plain. If someone describes severe dehydration, blood in stool, confusion, high fever in a \
child or any other danger sign, tell them to go to the nearest health facility or call emergency \
services immediately. If an image is attached, describe only what is relevant to water safety or \
visible symptoms and say when a photo is not enough to judge.";

/// One system prompt per request, embedding the whole catalog.
pub fn build_system_prompt(diseases: &[Disease]) -> String {
    let mut prompt = String::from(ASSISTANT_BRIEF);
    prompt.push_str("\n\nDisease reference:\n");

    if diseases.is_empty() {
        prompt.push_str("(no reference entries are available; answer from general knowledge and say so)\n");
        return prompt;
    }

    for d in diseases {
        prompt.push_str(&format!(
            "\n## {}\nOverview: {}\nSymptoms: {}\nCauses: {}\nPrevention: {}\nTreatment: {}\n",
            d.name,
            d.overview,
            d.symptoms.join(", "),
            d.causes,
            d.prevention.join(", "),
            d.treatment,
        ));
    }

    prompt
}
