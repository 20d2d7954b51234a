use crate::domain::prompt::entities::prompt::Prompt;

pub const PRODUCT_INSIGHT_PROMPT: Prompt = Prompt::new(
    "product_insight",
    "1",
    "Identify if the given product is a Chinese product. If it is, return the details in the \
     following JSON schema. If the product is not Chinese, or cannot be physically consumed or \
     used, return null for all fields. For the product link, perform a google search for the \
     product name. Verify that the link redirects correctly to the google search  as such: \
     https://www.google.com/search?q=[name]. If you cannot confidently determine if the text \
     identifies a Chinese product, significantly lower the confidence levels. Follow the JSON \
     schema precisely.",
);

pub const RESTAURANT_FINDER_PROMPT: Prompt = Prompt::new(
    "restaurant_finder",
    "1",
    "Find a Chinese restaurant in {location}, using the given food data. Include a diverse \
     selection of both well-known and lesser-known restaurants, not just popular ones. Try to \
     unprioritize Michelin star restaurants and prioritize cost. Verify that the restaurant is \
     currently open and located in {location}. All preference combinations are on a scale of \
     100. If the restaurant offers an unusual or irregular combination of flavors, assign a low \
     confidence score.",
);
