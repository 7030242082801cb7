<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Save profile button</description>
   <name>btn_SaveProfile</name>
   <tag></tag>
   <elementGuidId>profile-save-button</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//button[contains(text(), 'Save') or @type='submit']</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>button[type='submit'], [data-testid='save-profile']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
