//! Builtin localized content shipped with the engine.
//!
//! The catalog is a static data input: it is initialized once on first access
//! and cached for the lifetime of the process. Flow logic never depends on
//! the concrete strings here, only on the record shape.

use std::sync::OnceLock;

use super::model::{Catalog, CatalogEntry};

/// Static storage for the builtin catalog (initialized once).
static BUILTIN_CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Returns the builtin catalog.
///
/// One entry per supported language, in [`Lang::ALL`] order.
pub fn builtin_catalog() -> &'static Catalog {
    BUILTIN_CATALOG.get_or_init(|| {
        Catalog::new([
            CatalogEntry {
                native_name: "English",
                menu_label: "🇬🇧 English",
                greeting: "<b>🛟 Help Center</b>\n\n👋 Hello, {name}! Welcome to our support bot.\nPlease choose your language:\n---\nUse /start to restart anytime.",
                welcome: "🌟 Thanks for choosing {lang_name}! Let's solve your issue.\n---\nPlease select the type of your issue:",
                wallet_prompt: "📩 Please provide your wallet address:",
                operator: "❗️If you have any questions or need assistance, please contact our operator directly:\n\n👤 @helpcenter_operator\nThey'll help you faster and more efficiently.",
                wallet_too_long: "⚠️ Wallet address is too long (max 100 characters). Please try again.",
                online: "🏓 Bot is online!",
                back_label: "⬅️ Back",
                restart_label: "🔁 Start over",
                processing_frames: ["🔄 Processing...", "⏳ Processing...", "✅ Processed!"],
                issues: &[
                    "1️⃣ 🔗 Wallet connection issue",
                    "2️⃣ ⏳ Transaction stuck or failed",
                    "3️⃣ 💸 Missing funds / wrong balance",
                    "4️⃣ 🖼️ Token not displaying",
                    "5️⃣ 🐞 Report a bug or leave feedback",
                    "6️⃣ 📞 Contact operator",
                ],
            },
            CatalogEntry {
                native_name: "Русский",
                menu_label: "🇷🇺 Русский",
                greeting: "<b>🛟 Help Center</b>\n\n👋 Здравствуйте, {name}! Добро пожаловать в бота поддержки.\nВыберите язык:\n---\nИспользуйте /start для перезапуска.",
                welcome: "🌟 Спасибо за выбор языка ({lang_name})! Давай решим твою проблему.\n---\nВыбери тип проблемы:",
                wallet_prompt: "📩 Пожалуйста, укажите адрес вашего кошелька:",
                operator: "❗️Если у вас возникли вопросы или нужна помощь — свяжитесь с оператором лично:\n\n👤 @helpcenter_operator\nОн подскажет и решит ваш вопрос быстрее.",
                wallet_too_long: "⚠️ Адрес кошелька слишком длинный (максимум 100 символов). Попробуйте снова.",
                online: "🏓 Бот онлайн!",
                back_label: "⬅️ Назад",
                restart_label: "🔁 Начать заново",
                processing_frames: ["🔄 Обработка...", "⏳ Обработка...", "✅ Готово!"],
                issues: &[
                    "1️⃣ 🔗 Не подключается кошелёк",
                    "2️⃣ ⏳ Транзакция зависла или обмен не прошёл",
                    "3️⃣ 💸 Пропали средства / некорректный баланс",
                    "4️⃣ 🖼️ Токен не отображается",
                    "5️⃣ 🐞 Сообщить об ошибке или оставить отзыв",
                    "6️⃣ 📞 Связаться с оператором",
                ],
            },
            CatalogEntry {
                native_name: "Español",
                menu_label: "🇪🇸 Español",
                greeting: "<b>🛟 Help Center</b>\n\n👋 ¡Hola, {name}! Bienvenido al bot de soporte.\nSelecciona tu idioma:\n---\nUsa /start para reiniciar en cualquier momento.",
                welcome: "🌟 ¡Gracias por elegir {lang_name}! Vamos a resolver tu problema.\n---\nElige el tipo de problema:",
                wallet_prompt: "📩 Por favor, proporciona la dirección de tu billetera:",
                operator: "❗️Si tiene preguntas o necesita ayuda, comuníquese directamente con nuestro operador:\n\n👤 @helpcenter_operator\nÉl te ayudará más rápido y eficazmente.",
                wallet_too_long: "⚠️ La dirección de la billetera es demasiado larga (máximo 100 caracteres). Inténtalo de nuevo.",
                online: "🏓 ¡El bot está en línea!",
                back_label: "⬅️ Volver",
                restart_label: "🔁 Empezar de nuevo",
                processing_frames: ["🔄 Procesando...", "⏳ Procesando...", "✅ ¡Procesado!"],
                issues: &[
                    "1️⃣ 🔗 Problema de conexión de billetera",
                    "2️⃣ ⏳ Transacción atascada o fallida",
                    "3️⃣ 💸 Fondos desaparecidos / saldo incorrecto",
                    "4️⃣ 🖼️ Token no visible",
                    "5️⃣ 🐞 Informar error o dejar comentario",
                    "6️⃣ 📞 Contactar con operador",
                ],
            },
            CatalogEntry {
                native_name: "中文",
                menu_label: "🇨🇳 中文",
                greeting: "<b>🛟 Help Center</b>\n\n👋 你好，{name}！欢迎使用我们的支持机器人。\n请选择您的语言：\n---\n随时使用 /start 重新开始。",
                welcome: "🌟 感谢选择 {lang_name}！让我们解决您的问题。\n---\n请选择您的问题类型：",
                wallet_prompt: "📩 请输入您的钱包地址：",
                operator: "❗️如有任何问题或需要帮助，请直接联系我们的客服人员：\n\n👤 @helpcenter_operator\n他们会更快更有效地帮助您。",
                wallet_too_long: "⚠️ 钱包地址过长（最多100个字符）。请重试。",
                online: "🏓 机器人在线！",
                back_label: "⬅️ 返回",
                restart_label: "🔁 重新开始",
                processing_frames: ["🔄 处理中...", "⏳ 处理中...", "✅ 处理完成！"],
                issues: &[
                    "1️⃣ 🔗 钱包连接问题",
                    "2️⃣ ⏳ 交易卡住或失败",
                    "3️⃣ 💸 资金丢失 / 余额错误",
                    "4️⃣ 🖼️ 代币未显示",
                    "5️⃣ 🐞 报告错误或留下反馈",
                    "6️⃣ 📞 联系客服",
                ],
            },
            CatalogEntry {
                native_name: "Français",
                menu_label: "🇫🇷 Français",
                greeting: "<b>🛟 Help Center</b>\n\n👋 Bonjour, {name} ! Bienvenue sur le bot de support.\nVeuillez choisir votre langue :\n---\nUtilisez /start pour redémarrer à tout moment.",
                welcome: "🌟 Merci d'avoir choisi {lang_name} ! Résolvons votre problème.\n---\nChoisissez le type de problème :",
                wallet_prompt: "📩 Veuillez fournir l'adresse de votre portefeuille :",
                operator: "❗️Si vous avez des questions ou besoin d'aide, contactez directement notre opérateur :\n\n👤 @helpcenter_operator\nIl vous aidera plus rapidement et efficacement.",
                wallet_too_long: "⚠️ L'adresse du portefeuille est trop longue (maximum 100 caractères). Veuillez réessayer.",
                online: "🏓 Le bot est en ligne !",
                back_label: "⬅️ Retour",
                restart_label: "🔁 Recommencer",
                processing_frames: ["🔄 Traitement...", "⏳ Traitement...", "✅ Terminé !"],
                issues: &[
                    "1️⃣ 🔗 Problème de connexion au portefeuille",
                    "2️⃣ ⏳ Transaction bloquée ou échouée",
                    "3️⃣ 💸 Fonds manquants / solde incorrect",
                    "4️⃣ 🖼️ Jeton non affiché",
                    "5️⃣ 🐞 Signaler un bug ou donner un avis",
                    "6️⃣ 📞 Contacter un opérateur",
                ],
            },
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_cached() {
        let first = builtin_catalog() as *const Catalog;
        let second = builtin_catalog() as *const Catalog;
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_language_has_six_issues() {
        let catalog = builtin_catalog();
        for lang in Lang::ALL {
            assert_eq!(catalog.entry(lang).issues.len(), 6, "{:?}", lang);
        }
    }

    #[test]
    fn test_entry_for_code_resolves_supported_languages() {
        let catalog = builtin_catalog();
        let (lang, entry) = catalog.entry_for_code("fr").expect("fr is supported");
        assert_eq!(lang, Lang::Fr);
        assert_eq!(entry.native_name, "Français");
        assert!(catalog.entry_for_code("xx").is_none());
    }
}
