//! Story, outro and credits copy.

pub const STORY_INTRO: &str = "Die Geschichte der Zwei – Ursprung der Welt\n\
Seit Anbeginn der Zeit existierten zwei Kräfte, älter als das Universum selbst:\n\
Kosmos, der Gott der Ordnung, und Umbra, der Gott des Chaos.\n\
Unsichtbar für die Menschheit wachten sie über die Welt, hielten Naturgesetze stabil, lenkten Zufall und Schicksal und sorgten dafür, dass Licht und Dunkelheit im Gleichgewicht blieben.\n\
Jahrtausende lang war ihre Harmonie unerschütterlich.\n\
Doch die Menschen veränderten alles.\n\
Mit dem Aufstieg der modernen Zivilisation begannen sie, das Gleichgewicht zu stören:\n\
Kriege, Umweltzerstörung, massenhafte Datenströme, unkontrollierte Technologien, manipulierte Informationen – all das verstärkte Umbra, den Gott des Chaos.\n\
Sein Einfluss breitete sich in Schatten aus, zwischen Radiowellen, im Lärm der Städte, in den Ängsten der Menschen.\n\
Je chaotischer die Welt wurde, desto schwächer wurde Kosmos.\n\
Die Welt selbst – die echte Welt – geriet aus dem Gleichgewicht.\n\
Eine Seele, die das Gleichgewicht wiederherstellen kann.\n\n\
Du bist diese Seele.\n\n\
Deine Aufgabe ist es, die chaotischen Elemente der Welt zu ordnen und das Gleichgewicht zwischen Kosmos und Umbra wiederherzustellen.\n\
Die Zukunft der Welt liegt in deinen Händen.";

pub const STORY_OUTRO: &str = "Auserwählter… du hast es geschafft.\n\
Der Computer ist erwacht, die Welt kehrt ins Gleichgewicht zurück.\n\
Durch alle Zeitalter hindurch hast du dich dem Chaos gestellt – von den ersten Planeten des Sonnensystems bis zur modernen Welt, in der Wissen und Technologie die Zukunft formen.\n\
Du hast gezeigt, dass Ordnung nicht bedeutet, alles unverändert zu lassen…\n\
sondern die Kraft, aus jedem Chaos etwas Neues entstehen zu lassen.\n\n\
Umbra wurde geschwächt – doch nicht vernichtet.\n\
Denn Chaos kann niemals völlig verschwinden.\n\n\
Es bleibt ein Teil des Universums… und unseres Weges.\n\
Aber solange es jemanden wie dich gibt, der die Balance sucht, der Mut zeigt, wo andere verzweifeln, und Licht bringt, wo Schatten wuchern… wird die Welt niemals untergehen.\n\n\
Ruhe dich aus, Auserwählter.\n\n\
Doch sei bereit: Die Geschichte ist nicht zu Ende.\n\
Die Zeit wird neue Prüfungen bringen.\n\
Und wenn die Ordnung erneut erschüttert wird… werde ich dich wieder rufen.\n\n\
Ps: Und die Nase der Sphinx ist auch wieder dran…";

pub const CONTINUE_HINT: &str = "Weiter mit Klick oder Leertaste";

pub const CREDITS: &str = "🎮 Game Credits 🎮\n\n\
Projektleitung:\n- Alexander Vielkind\n- Nil Vollhardt\n\n\
Programmierung:\n- Alexander Vielkind\n- Nil Vollhardt\n\n\
Grafik & Design:\n- Alexander Vielkind\n- Nil Vollhardt\n\n\
Musik & Sound:\n- ElevenLabs\n\n\
Story:\n- Alexander Vielkind\n- Nil Vollhardt\n\n\
QA & Testing:\n- Alexander Vielkind\n- Nil Vollhardt\n\n\
Besonderer Dank:\n- An alle, die uns Feedback gegeben haben\n\n\
© 2025 Projekt Die Geschichte der Zwei - Ursprung der Welt •\n\
Alle Rechte vorbehalten";

/// Rough rendered height of a label, for layouts that need it before the host measures.
pub fn estimated_height(text: &str, font_size: f32) -> f32 {
    text.lines().count().max(1) as f32 * font_size * 1.25
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuation_lines_keep_their_breaks() {
        assert!(STORY_INTRO.starts_with("Die Geschichte der Zwei – Ursprung der Welt\nSeit Anbeginn"));
        assert!(STORY_OUTRO.ends_with("wieder dran…"));
        assert_eq!(CREDITS.lines().next(), Some("🎮 Game Credits 🎮"));
    }

    #[test]
    fn height_counts_lines() {
        assert_eq!(estimated_height("a\nb", 20.0), 50.0);
        assert_eq!(estimated_height("", 20.0), 25.0);
    }
}
